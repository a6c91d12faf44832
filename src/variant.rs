//! Closed-set variants and visitor dispatch.
//!
//! [`Visitor::visit`] matches every alternative of [`Variant`] without a
//! wildcard arm. Adding an alternative breaks the build until each visitor
//! gains the matching `visit_*` method.

/// Exactly one of an integer or a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    Int(i32),
    Text(String),
}

impl From<i32> for Variant {
    fn from(value: i32) -> Self {
        Variant::Int(value)
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::Text(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::Text(value.to_string())
    }
}

/// Operation over every alternative of [`Variant`].
pub trait Visitor {
    type Output;

    fn visit(&mut self, variant: &Variant) -> Self::Output {
        match variant {
            Variant::Int(i) => self.visit_int(*i),
            Variant::Text(s) => self.visit_text(s),
        }
    }

    fn visit_int(&mut self, value: i32) -> Self::Output;
    fn visit_text(&mut self, value: &str) -> Self::Output;
}

/// Integers map to themselves, text to its character count.
#[derive(Debug, Default, Clone, Copy)]
pub struct LengthVisitor;

impl Visitor for LengthVisitor {
    type Output = i32;

    fn visit_int(&mut self, value: i32) -> i32 {
        value
    }

    fn visit_text(&mut self, value: &str) -> i32 {
        i32::try_from(value.chars().count()).unwrap_or(i32::MAX)
    }
}

pub fn apply_visitor<V: Visitor>(visitor: &mut V, variant: &Variant) -> V::Output {
    visitor.visit(variant)
}

pub fn process_variant(variant: &Variant) -> i32 {
    apply_visitor(&mut LengthVisitor, variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_maps_to_itself() {
        assert_eq!(process_variant(&Variant::Int(42)), 42);
    }

    #[test]
    fn text_maps_to_length() {
        assert_eq!(process_variant(&Variant::from("Boost")), 5);
        assert_eq!(process_variant(&Variant::from("")), 0);
    }

    #[test]
    fn text_length_counts_characters() {
        let text = "日本語";
        assert_eq!(text.len(), 9);
        assert_eq!(process_variant(&Variant::from(text)), 3);
        assert_eq!(process_variant(&Variant::from("héllo")), 5);
    }

    #[test]
    fn reassignment_switches_alternative() {
        let mut var = Variant::from(42);
        assert_eq!(process_variant(&var), 42);

        var = "Boost".into();
        assert_eq!(process_variant(&var), 5);
    }

    struct Describe;

    impl Visitor for Describe {
        type Output = String;

        fn visit_int(&mut self, value: i32) -> String {
            format!("int {}", value)
        }

        fn visit_text(&mut self, value: &str) -> String {
            format!("text {:?}", value)
        }
    }

    #[test]
    fn custom_visitor_output() {
        assert_eq!(apply_visitor(&mut Describe, &Variant::Int(1)), "int 1");
        assert_eq!(
            apply_visitor(&mut Describe, &Variant::from("a")),
            "text \"a\""
        );
    }

    #[test]
    fn stateful_visitor() {
        #[derive(Default)]
        struct Counter {
            ints: usize,
            texts: usize,
        }

        impl Visitor for Counter {
            type Output = ();

            fn visit_int(&mut self, _: i32) {
                self.ints += 1;
            }

            fn visit_text(&mut self, _: &str) {
                self.texts += 1;
            }
        }

        let mut counter = Counter::default();
        for v in [Variant::Int(1), Variant::from("x"), Variant::Int(2)] {
            counter.visit(&v);
        }
        assert_eq!((counter.ints, counter.texts), (2, 1));
    }
}
