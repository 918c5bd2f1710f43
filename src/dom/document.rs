use super::node::{Content, Element};
use super::DomError;

/// An ordered tree of root elements. Lookup is by element id, anywhere in
/// the tree; structural edits find the list that owns the target node.
#[derive(Debug, Default)]
pub struct Document {
    roots: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) {
        self.roots.push(element);
    }

    pub fn roots(&self) -> &[Element] {
        &self.roots
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.roots.iter().find_map(|root| find(root, id))
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.roots.iter_mut().find_map(|root| find_mut(root, id))
    }

    /// Insert `element` as the immediately preceding sibling of the element
    /// with id `anchor_id`, wherever that element lives in the tree.
    pub fn insert_before(&mut self, anchor_id: &str, element: Element) -> Result<(), DomError> {
        match insert_in(&mut self.roots, anchor_id, element) {
            Ok(()) => Ok(()),
            Err(_) => Err(DomError::NotFound(anchor_id.to_string())),
        }
    }

    /// Detach the element with the given id from the tree and return it.
    pub fn remove(&mut self, id: &str) -> Result<Element, DomError> {
        remove_in(&mut self.roots, id).ok_or_else(|| DomError::NotFound(id.to_string()))
    }
}

fn find<'a>(element: &'a Element, id: &str) -> Option<&'a Element> {
    if element.id == id {
        return Some(element);
    }
    element.child_nodes().iter().find_map(|child| find(child, id))
}

fn find_mut<'a>(element: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if element.id == id {
        return Some(element);
    }
    element
        .child_nodes_mut()
        .iter_mut()
        .find_map(|child| find_mut(child, id))
}

// Returns the element back through Err so the caller can keep searching
// sibling subtrees without a clone.
fn insert_in(list: &mut Vec<Element>, anchor_id: &str, element: Element) -> Result<(), Element> {
    if let Some(index) = list.iter().position(|e| e.id == anchor_id) {
        list.insert(index, element);
        return Ok(());
    }
    let mut element = element;
    for item in list.iter_mut() {
        if let Content::Children(children) = &mut item.content {
            match insert_in(children, anchor_id, element) {
                Ok(()) => return Ok(()),
                Err(back) => element = back,
            }
        }
    }
    Err(element)
}

fn remove_in(list: &mut Vec<Element>, id: &str) -> Option<Element> {
    if let Some(index) = list.iter().position(|e| e.id == id) {
        return Some(list.remove(index));
    }
    for item in list.iter_mut() {
        if let Content::Children(children) = &mut item.content {
            if let Some(removed) = remove_in(children, id) {
                return Some(removed);
            }
        }
    }
    None
}
