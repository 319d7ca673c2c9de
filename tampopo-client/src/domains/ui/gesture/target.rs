/// Whatever the pointer went down on, as far as gesture tracking cares.
///
/// Gestures that start on interactive controls are left to those controls.
pub trait InteractiveTarget {
    fn is_interactive(&self) -> bool;
}

impl<T: InteractiveTarget + ?Sized> InteractiveTarget for &T {
    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }
}

/// Role of the element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetRole {
    /// Text inputs
    Input,
    Button,
    Link,
    /// Any element carrying `role="button"`
    AriaButton,
    #[default]
    Content,
}

impl TargetRole {
    /// Classifies an element from its tag name and ARIA role.
    pub fn classify(tag: &str, aria_role: Option<&str>) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "input" => TargetRole::Input,
            "button" => TargetRole::Button,
            "a" => TargetRole::Link,
            _ if aria_role
                .is_some_and(|role| role.eq_ignore_ascii_case("button")) =>
            {
                TargetRole::AriaButton
            }
            _ => TargetRole::Content,
        }
    }
}

impl InteractiveTarget for TargetRole {
    fn is_interactive(&self) -> bool {
        !matches!(self, TargetRole::Content)
    }
}
