//! Printable values
//!
//! Text rendering used by `FileLogger::print` and `FileLogger::println`.

/// A value that can be appended to a log file as text.
///
/// Strings and characters render verbatim, integers in decimal, and floating
/// point values in fixed notation with two decimal digits.
pub trait Printable {
    fn render(&self) -> String;
}

impl Printable for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Printable for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl Printable for char {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: Printable + ?Sized> Printable for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

macro_rules! printable_integer {
    ($($t:ty),*) => {
        $(impl Printable for $t {
            fn render(&self) -> String {
                self.to_string()
            }
        })*
    };
}

printable_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Printable for f32 {
    fn render(&self) -> String {
        format!("{:.2}", self)
    }
}

impl Printable for f64 {
    fn render(&self) -> String {
        format!("{:.2}", self)
    }
}
