//! Element table: one arena, indexed by name and by grid position.
//!
//! Both indexes are only written by `insert_unchecked`, after every check for the insertion has
//! passed, so a rejected insertion leaves the table untouched.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::core::error::ErrorKind;
use crate::ui::core::geom::Rect;
use crate::ui::core::id::Id;
use crate::ui::element::{Element, ElementKind, Position, RadioGroup, Widget};

new_key_type! { pub struct ElementKey; }

#[derive(Debug, Default)]
pub struct ElementTable {
    arena: SlotMap<ElementKey, Element>,
    order: Vec<ElementKey>,
    by_name: FxHashMap<String, ElementKey>,
    by_position: FxHashMap<Position, ElementKey>,
}

impl ElementTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn key(&self, name: &str) -> Option<ElementKey> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, key: ElementKey) -> Option<&Element> {
        self.arena.get(key)
    }

    pub fn get_mut(&mut self, key: ElementKey) -> Option<&mut Element> {
        self.arena.get_mut(key)
    }

    pub fn by_name(&self, name: &str) -> Option<&Element> {
        self.key(name).and_then(|k| self.arena.get(k))
    }

    pub fn at(&self, position: Position) -> Option<&Element> {
        self.by_position
            .get(&position)
            .and_then(|k| self.arena.get(*k))
    }

    /// Elements in insertion order (groups included).
    pub fn iter(&self) -> impl Iterator<Item = (ElementKey, &Element)> + '_ {
        self.order
            .iter()
            .filter_map(|k| self.arena.get(*k).map(|e| (*k, e)))
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> + '_ {
        self.arena.values_mut()
    }

    /// Identity scan in insertion order.
    pub fn owner_of(&self, id: Id) -> Option<ElementKey> {
        self.iter().find(|(_, e)| e.owns(id)).map(|(k, _)| k)
    }

    pub fn check_name(&self, name: &str) -> Result<(), ErrorKind> {
        if name.trim().is_empty() {
            return Err(ErrorKind::InvalidName {
                name: name.to_string(),
            });
        }
        if self.by_name.contains_key(name) {
            return Err(ErrorKind::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    pub fn check_position(&self, position: Position) -> Result<(), ErrorKind> {
        if self.by_position.contains_key(&position) {
            return Err(ErrorKind::PositionOccupied { position });
        }
        Ok(())
    }

    /// Existing group called `name`, `None` when it would have to be created.
    pub fn resolve_group(&self, name: &str) -> Result<Option<ElementKey>, ErrorKind> {
        if name.trim().is_empty() {
            return Err(ErrorKind::InvalidName {
                name: name.to_string(),
            });
        }
        match self.key(name) {
            None => Ok(None),
            Some(key) => match self.arena.get(key).map(Element::kind) {
                Some(ElementKind::RadioGroup) => Ok(Some(key)),
                _ => Err(ErrorKind::GroupNameConflict {
                    name: name.to_string(),
                }),
            },
        }
    }

    pub fn insert(&mut self, element: Element) -> Result<ElementKey, ErrorKind> {
        self.check_name(element.name())?;
        if let Some(position) = element.position() {
            self.check_position(position)?;
        }
        Ok(self.insert_unchecked(element))
    }

    /// Adds a radio button to `group`, creating the group on first use.
    ///
    /// A button that arrives selected in a group that already has a selection is stored
    /// deselected.
    pub fn insert_radio(&mut self, group: &str, mut element: Element) -> Result<ElementKey, ErrorKind> {
        if element.name() == group {
            return Err(ErrorKind::DuplicateName {
                name: group.to_string(),
            });
        }
        self.check_name(element.name())?;
        if let Some(position) = element.position() {
            self.check_position(position)?;
        }
        let existing = self.resolve_group(group)?;

        let group_key = match existing {
            Some(key) => key,
            None => {
                let group_element = Element::new(
                    group,
                    None,
                    Rect::default(),
                    element.font().clone(),
                    element.text_color(),
                    Widget::RadioGroup(RadioGroup::default()),
                );
                self.insert_unchecked(group_element)
            }
        };
        let taken = self.selected_member(group_key).is_some();
        if let Widget::RadioButton(radio) = element.widget_mut() {
            radio.group = group_key;
            if radio.selected && taken {
                radio.selected = false;
            }
        }

        let key = self.insert_unchecked(element);
        if let Some(Widget::RadioGroup(g)) = self.arena.get_mut(group_key).map(Element::widget_mut) {
            g.members.push(key);
        }
        Ok(key)
    }

    fn insert_unchecked(&mut self, element: Element) -> ElementKey {
        let name = element.name().to_string();
        let position = element.position();
        let key = self.arena.insert(element);
        self.order.push(key);
        self.by_name.insert(name, key);
        if let Some(position) = position {
            self.by_position.insert(position, key);
        }
        key
    }

    fn members(&self, group: ElementKey) -> &[ElementKey] {
        match self.arena.get(group).map(Element::widget) {
            Some(Widget::RadioGroup(g)) => &g.members,
            _ => &[],
        }
    }

    fn is_selected(&self, key: ElementKey) -> bool {
        matches!(
            self.arena.get(key).map(Element::widget),
            Some(Widget::RadioButton(r)) if r.selected
        )
    }

    pub fn selected_member(&self, group: ElementKey) -> Option<ElementKey> {
        self.members(group)
            .iter()
            .copied()
            .find(|k| self.is_selected(*k))
    }

    fn set_selected(&mut self, key: ElementKey, selected: bool) {
        if let Some(Widget::RadioButton(r)) = self.arena.get_mut(key).map(Element::widget_mut) {
            r.selected = selected;
        }
    }

    /// Selects `radio` and clears every other member of its group.
    pub fn select_radio(&mut self, radio: ElementKey) {
        let group = match self.arena.get(radio).map(Element::widget) {
            Some(Widget::RadioButton(r)) => r.group,
            _ => return,
        };
        let members = self.members(group).to_vec();
        for member in members {
            self.set_selected(member, member == radio);
        }
    }

    /// Value of the element; a group reports the name of its selected member.
    pub fn value(&self, key: ElementKey) -> Option<String> {
        let element = self.arena.get(key)?;
        match element.widget() {
            Widget::RadioGroup(_) => self
                .selected_member(key)
                .and_then(|k| self.arena.get(k))
                .map(|e| e.name().to_string()),
            _ => element.value(),
        }
    }

    /// Applies `value`; `false` when it was not understood and nothing changed.
    pub fn set_value(&mut self, key: ElementKey, value: &str) -> bool {
        let kind = match self.arena.get(key) {
            Some(element) => element.kind(),
            None => return false,
        };
        match kind {
            ElementKind::RadioGroup => {
                let target = self
                    .members(key)
                    .iter()
                    .copied()
                    .find(|k| self.arena.get(*k).is_some_and(|e| e.name() == value));
                match target {
                    Some(member) => {
                        self.select_radio(member);
                        true
                    }
                    None => false,
                }
            }
            ElementKind::RadioButton if value == "true" => {
                self.select_radio(key);
                true
            }
            _ => self
                .arena
                .get_mut(key)
                .is_some_and(|e| e.set_value(value)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/registry.rs"]
mod tests;
