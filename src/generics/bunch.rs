//! Generics on a struct: a newtype over `Vec<E>` whose methods pick up the
//! type parameter from the impl block.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Bunch<E>(pub Vec<E>);

impl<E> Bunch<E> {
    /// First element, `None` when the bunch is empty.
    pub fn first(&self) -> Option<&E> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<E: fmt::Display> fmt::Display for Bunch<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "]")
    }
}

/// Free-function flavor of the same demo; the bound lives on the function
/// instead of the impl block.
pub fn print_bunch<E: fmt::Display>(b: &Bunch<E>) -> String {
    b.to_string()
}
