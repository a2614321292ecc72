//! Component declarations.

/// A named set of style properties whose values may reference tokens by
/// `{path}`. Components never own tokens; references are resolved by
/// lookup at emit time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Component {
    pub name: String,
    /// Property name → raw value string, in document order.
    pub props: Vec<(String, String)>,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            props: Vec::new(),
        }
    }

    /// Append a property, preserving declaration order.
    pub fn push_prop(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.props.push((name.into(), value.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_keep_order() {
        let mut c = Component::new("button-primary");
        c.push_prop("background", "{color.primary}");
        c.push_prop("color", "#FFFFFF");
        c.push_prop("hover-background", "{color.primary-dark}");

        let names: Vec<&str> = c.props.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["background", "color", "hover-background"]);
    }
}
