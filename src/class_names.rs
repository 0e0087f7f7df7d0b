//! Utility-class composition.
//!
//! Components build their `class` attribute from a fixed base, a few
//! conditional classes and whatever the caller passes in. When two classes set
//! the same CSS property (`text-white` and `text-danger-100`, `w-48` and
//! `w-[170px]`) only the one added last survives, so caller overrides win over
//! component defaults.

use std::fmt;

use dioxus::{dioxus_core::AttributeValue, prelude::*};
use tailwind_fuse::tw_merge;

/// An ordered list of classes, merged on output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new(base: impl AsRef<str>) -> Self {
        Self::default().push(base)
    }

    /// Appends every whitespace-separated class in `classes`.
    pub fn push(mut self, classes: impl AsRef<str>) -> Self {
        self.tokens
            .extend(classes.as_ref().split_whitespace().map(str::to_string));
        self
    }

    pub fn push_if(self, condition: bool, classes: impl AsRef<str>) -> Self {
        if condition { self.push(classes) } else { self }
    }

    /// Appends optional caller classes, typically a `class` prop.
    pub fn extend<S: AsRef<str>>(self, classes: Option<S>) -> Self {
        match classes {
            Some(c) => self.push(c),
            None => self,
        }
    }

    /// Merges conflicting classes, keeping the last of each group.
    pub fn build(&self) -> String {
        let joined = self.tokens.join(" ");
        tw_merge!(joined.as_str())
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

/// Composes classes in order and merges conflicts.
///
/// ```
/// use menukit::class_names::cn;
/// assert_eq!(cn(["px-3 text-white", "text-danger-100"]), "px-3 text-danger-100");
/// ```
pub fn cn<I, S>(inputs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .fold(ClassList::default(), |list, c| list.push(c))
        .build()
}

/// Removes the `class` attributes a caller passed through to a component
/// and returns their classes, so they can be merged over the component's own.
pub fn take_class(attributes: &mut Vec<Attribute>) -> Option<String> {
    let mut classes: Vec<String> = Vec::new();
    attributes.retain(|attr| {
        if attr.name != "class" {
            return true;
        }
        if let AttributeValue::Text(text) = &attr.value {
            classes.push(text.clone());
        }
        false
    });
    (!classes.is_empty()).then(|| classes.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_text_colour_wins() {
        assert_eq!(
            cn(["flex items-center text-sm text-white", "text-danger-100"]),
            "flex items-center text-sm text-danger-100"
        );
    }

    #[test]
    fn different_groups_are_kept() {
        assert_eq!(cn(["px-3 pl-10 h-8"]), "px-3 pl-10 h-8");
        assert_eq!(cn(["border border-neutral-500"]), "border border-neutral-500");
    }

    #[test]
    fn variants_scope_conflicts() {
        assert_eq!(
            cn(["bg-neutral-850 hover:bg-neutral-800", "data-[state=open]:bg-neutral-800"]),
            "bg-neutral-850 hover:bg-neutral-800 data-[state=open]:bg-neutral-800"
        );
        assert_eq!(cn(["hover:bg-red-500", "hover:bg-blue-500"]), "hover:bg-blue-500");
    }

    #[test]
    fn caller_overrides_layout() {
        let class = ClassList::new("z-50 w-[170px] rounded-lg")
            .extend(Some("w-48 rounded-none"))
            .build();
        assert_eq!(class, "z-50 w-48 rounded-none");
    }

    #[test]
    fn conditional_classes() {
        let caption = true;
        let class = ClassList::new("relative flex w-full")
            .push_if(!caption, "h-8 items-center")
            .push_if(caption, "h-12 flex-col justify-center")
            .extend(None::<&str>)
            .to_string();
        assert_eq!(class, "relative flex w-full h-12 flex-col justify-center");
    }

    #[test]
    fn shorthand_replaces_earlier_sides() {
        assert_eq!(cn(["px-2", "p-4"]), "p-4");
        assert_eq!(cn(["top-2 inset-0"]), "inset-0");
    }

    #[test]
    fn later_border_colour_wins() {
        assert_eq!(
            cn(["border border-neutral-500", "border-primary-900"]),
            "border border-primary-900"
        );
    }

    #[test]
    fn display_and_position_groups() {
        assert_eq!(cn(["flex relative", "hidden absolute"]), "hidden absolute");
    }

    #[test]
    fn class_is_taken_from_passthrough_attributes() {
        let mut attributes = vec![
            Attribute::new("id", "menu", None, false),
            Attribute::new("class", "w-48", None, false),
        ];
        assert_eq!(take_class(&mut attributes).as_deref(), Some("w-48"));
        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes[0].name, "id");
        assert_eq!(take_class(&mut attributes), None);
    }
}
