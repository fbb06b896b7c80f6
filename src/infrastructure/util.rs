use crate::application::ports::util::Slugifier;
use slug::slugify;

/// Transliterating slugifier; Cyrillic input comes out as Latin (`Спорт` → `sport`).
#[derive(Default, Clone)]
pub struct DefaultSlugifier;

impl Slugifier for DefaultSlugifier {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transliterates_mongolian_cyrillic() {
        let s = DefaultSlugifier;
        assert_eq!(s.slugify("Спорт"), "sport");
        assert_eq!(s.slugify("Спорт!!"), "sport");
        assert_eq!(s.slugify("  Hello  World "), "hello-world");
    }
}
