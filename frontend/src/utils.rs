/// Merges conditional class lists into one `class` attribute value.
///
/// Each part may hold several whitespace separated classes. Absent parts,
/// empty strings and repeated class names are dropped; the first occurrence
/// of a class keeps its position.
pub fn cn<'a, I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<Option<&'a str>>,
{
    let mut seen: Vec<&'a str> = Vec::new();
    for part in parts.into_iter().filter_map(Into::into) {
        for class in part.split_whitespace() {
            if !seen.contains(&class) {
                seen.push(class);
            }
        }
    }
    seen.join(" ")
}

#[cfg(test)]
mod tests {
    use super::cn;

    #[test]
    fn joins_plain_parts() {
        assert_eq!(cn(["bg-hero", "min-h-screen"]), "bg-hero min-h-screen");
    }

    #[test]
    fn skips_absent_and_empty_parts() {
        let compact = false;
        let parts = [Some("card"), compact.then_some("card--compact"), Some(""), Some("shadow")];
        assert_eq!(cn(parts), "card shadow");
    }

    #[test]
    fn splits_multi_class_parts_and_drops_duplicates() {
        assert_eq!(
            cn(["card  shadow", "shadow blur", " card "]),
            "card shadow blur"
        );
    }

    #[test]
    fn empty_input_gives_empty_string() {
        assert_eq!(cn(Vec::<Option<&str>>::new()), "");
    }
}
