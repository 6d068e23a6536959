use std::fmt;

use super::cycle;

/// Sex chosen on the form. `Unset` is the picker's placeholder entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sex {
    #[default]
    Unset,
    Masculino,
    Feminino,
    Outro,
}

static ALL_OPTIONS: &[Sex] = &[Sex::Unset, Sex::Masculino, Sex::Feminino, Sex::Outro];

impl Sex {
    /// Returns the label shown in the picker.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Unset => "Selecione o sexo",
            Sex::Masculino => "Masculino",
            Sex::Feminino => "Feminino",
            Sex::Outro => "Outro",
        }
    }

    /// Returns every picker option, placeholder first.
    pub fn all() -> &'static [Sex] {
        ALL_OPTIONS
    }

    /// Returns `true` for any option other than the placeholder.
    pub fn is_selected(&self) -> bool {
        *self != Sex::Unset
    }

    /// Returns the next option, wrapping around.
    pub fn next(self) -> Self {
        cycle(ALL_OPTIONS, self, true)
    }

    /// Returns the previous option, wrapping around.
    pub fn prev(self) -> Self {
        cycle(ALL_OPTIONS, self, false)
    }
}

#[mutants::skip]
impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    use super::*;

    impl Arbitrary for Sex {
        fn arbitrary(g: &mut Gen) -> Self {
            *g.choose(Sex::all()).unwrap_or(&Sex::Unset)
        }
    }

    #[test]
    fn default_is_placeholder() {
        assert_eq!(Sex::default(), Sex::Unset);
        assert!(!Sex::default().is_selected());
    }

    #[test]
    fn options_are_selected() {
        assert!(Sex::Masculino.is_selected());
        assert!(Sex::Feminino.is_selected());
        assert!(Sex::Outro.is_selected());
    }

    #[test]
    fn all_has_four_options_placeholder_first() {
        assert_eq!(Sex::all().len(), 4);
        assert_eq!(Sex::all()[0], Sex::Unset);
    }

    #[test]
    fn labels_match_picker() {
        let labels: Vec<&str> = Sex::all().iter().map(Sex::label).collect();
        assert_eq!(
            labels,
            vec!["Selecione o sexo", "Masculino", "Feminino", "Outro"]
        );
    }

    #[test]
    fn next_cycles_in_order() {
        assert_eq!(Sex::Unset.next(), Sex::Masculino);
        assert_eq!(Sex::Masculino.next(), Sex::Feminino);
        assert_eq!(Sex::Feminino.next(), Sex::Outro);
        assert_eq!(Sex::Outro.next(), Sex::Unset);
    }

    #[test]
    fn prev_wraps_from_placeholder() {
        assert_eq!(Sex::Unset.prev(), Sex::Outro);
    }

    #[quickcheck]
    fn next_then_prev_is_identity(sex: Sex) -> bool {
        sex.next().prev() == sex
    }

    #[quickcheck]
    fn next_four_times_is_identity(sex: Sex) -> bool {
        sex.next().next().next().next() == sex
    }
}
