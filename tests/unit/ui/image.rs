use super::*;
use std::cell::Cell;
use std::rc::Rc;

struct CountingLoader {
    calls: Rc<Cell<usize>>,
}

impl ImageLoader for CountingLoader {
    fn load(&self, path: &Path) -> Result<Raster, ImageError> {
        self.calls.set(self.calls.get() + 1);
        if path.ends_with("missing.png") {
            return Err(ImageError::NotFound(path.to_path_buf()));
        }
        Ok(Raster::solid(4, 2, Color::RED))
    }
}

#[test]
fn solid_raster_reports_size_and_pixels() {
    let raster = Raster::solid(3, 2, Color::BLUE);
    assert_eq!(raster.width(), 3);
    assert_eq!(raster.height(), 2);
    assert_eq!(raster.pixel(2, 1), Some((Color::BLUE, 255)));
    assert_eq!(raster.pixel(3, 0), None);
}

#[test]
fn from_rgba_rejects_short_buffers() {
    assert!(Raster::from_rgba(2, 2, vec![0; 15]).is_none());
    let raster = Raster::from_rgba(1, 1, vec![1, 2, 3, 4]).unwrap();
    assert_eq!(raster.pixel(0, 0), Some((Color::rgb(1, 2, 3), 4)));
}

#[test]
fn scaled_copy_has_requested_size() {
    let raster = Raster::solid(10, 4, Color::GREEN);
    let scaled = raster.scaled(5, 2);
    assert_eq!((scaled.width(), scaled.height()), (5, 2));
    assert_eq!(scaled.pixel(0, 0).map(|(c, _)| c), Some(Color::GREEN));

    let degenerate = raster.scaled(0, 0);
    assert_eq!((degenerate.width(), degenerate.height()), (1, 1));
}

#[test]
fn cache_loads_each_path_once() {
    let calls = Rc::new(Cell::new(0));
    let mut cache = ImageCache::new(Box::new(CountingLoader {
        calls: calls.clone(),
    }));

    let a = cache.get(Path::new("a.png")).unwrap();
    let b = cache.get(Path::new("a.png")).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(calls.get(), 1);
    assert_eq!(cache.len(), 1);

    let err = cache.get(Path::new("missing.png")).unwrap_err();
    assert_eq!(err.path(), Path::new("missing.png"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn fs_loader_reports_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.png");
    let err = FsImageLoader.load(&path).unwrap_err();
    assert!(matches!(err, ImageError::NotFound(_)));
}

#[test]
fn fs_loader_decodes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dot.png");
    let mut img = image::RgbaImage::new(2, 3);
    img.put_pixel(1, 2, Rgba([9, 8, 7, 255]));
    img.save(&path).unwrap();

    let raster = FsImageLoader.load(&path).unwrap();
    assert_eq!((raster.width(), raster.height()), (2, 3));
    assert_eq!(raster.pixel(1, 2), Some((Color::rgb(9, 8, 7), 255)));
}

#[test]
fn fs_loader_reports_undecodable_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("junk.png");
    std::fs::write(&path, b"not an image").unwrap();
    let err = FsImageLoader.load(&path).unwrap_err();
    assert!(matches!(err, ImageError::Decode { .. }));
}
