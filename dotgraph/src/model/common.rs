//! Behavior shared by nodes, edges and graphs.

use super::graph::{top_graph_type, Graph, GraphType};
use crate::core::attr::{AttrValue, AttributeTable};

/// The attribute table, parent link and sequence number that every element of
/// the object model carries.
pub trait Common {
    /// Calls \p f with the attribute table of the element.
    fn read_attributes<R>(&self, f: impl FnOnce(&AttributeTable) -> R) -> R;

    fn update_attributes<R>(
        &self,
        f: impl FnOnce(&mut AttributeTable) -> R,
    ) -> R;

    /// Returns the top-level graph that this element belongs to.
    fn parent_graph(&self) -> Option<Graph>;

    fn set_parent_graph(&self, parent: &Graph);

    fn sequence(&self) -> Option<usize>;

    fn set_sequence(&self, seq: usize);

    /// The name of the default block that supplies fallback attribute values
    /// for this element ("graph", "node" or "edge").
    fn defaults_name(&self) -> &'static str;

    /// The GraphViz attributes that apply to this kind of element.
    fn known_attributes(&self) -> &'static [&'static str];

    fn is_known_attribute(&self, name: &str) -> bool {
        self.known_attributes().contains(&name)
    }

    fn attributes(&self) -> AttributeTable {
        self.read_attributes(|attrs| attrs.clone())
    }

    fn get(&self, name: &str) -> Option<AttrValue> {
        self.read_attributes(|attrs| attrs.get(name).cloned())
    }

    fn set<V: Into<AttrValue>>(&self, name: &str, value: V) {
        let value = value.into();
        self.update_attributes(|attrs| {
            attrs.insert(name.to_string(), value);
        });
    }

    fn remove(&self, name: &str) -> Option<AttrValue> {
        self.update_attributes(|attrs| attrs.shift_remove(name))
    }

    /// Returns the value of the attribute \p name. If the element doesn't set
    /// it, the first truthy value of the matching default block in the parent
    /// graph is used.
    fn lookup(&self, name: &str) -> Option<AttrValue> {
        match self.get(name) {
            None | Some(AttrValue::Implicit) => {}
            Some(value) => return Some(value),
        }

        let parent = self.parent_graph()?;
        parent
            .get_node(self.defaults_name())
            .iter()
            .filter(|node| node.is_defaults())
            .filter_map(|node| node.get(name))
            .find(|value| value.is_truthy())
    }

    /// Returns the type of the top-level graph, or None if the element is not
    /// attached to one.
    fn top_graph_type(&self) -> Option<GraphType> {
        top_graph_type(self.parent_graph())
    }
}
