/// File name offered for an exported document, derived from `personal.name`.
///
/// Runs of non-alphanumeric characters become a single `_`, leading and
/// trailing `_` are dropped and an empty result falls back to `CV`.
pub fn suggested_file_name(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.trim().chars() {
        if c.is_alphanumeric() {
            if pending_separator && !stem.is_empty() {
                stem.push('_');
            }
            pending_separator = false;
            stem.push(c);
        } else {
            pending_separator = true;
        }
    }

    if stem.is_empty() {
        stem.push_str("CV");
    }
    format!("{stem}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(suggested_file_name("Ada Lovelace"), "Ada_Lovelace.pdf");
    }

    #[test]
    fn test_runs_collapse_and_edges_are_stripped() {
        assert_eq!(suggested_file_name("  Dr. Jane   O'Neil, PhD "), "Dr_Jane_O_Neil_PhD.pdf");
        assert_eq!(suggested_file_name("--x--"), "x.pdf");
    }

    #[test]
    fn test_empty_name_falls_back_to_cv() {
        assert_eq!(suggested_file_name(""), "CV.pdf");
        assert_eq!(suggested_file_name("  ...  "), "CV.pdf");
    }

    #[test]
    fn test_non_ascii_letters_are_kept() {
        assert_eq!(suggested_file_name("José Ñúñez"), "José_Ñúñez.pdf");
    }
}
