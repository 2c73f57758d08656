// modport/src/candidates.rs
use std::path::Path;

/// Builds the ordered list of names to try for a module: the name as
/// given first, then one prefixed variant per prefix, in prefix order.
///
/// A prefix attaches to the final path segment only, so the prefixed
/// variants sit in the same directory as the original. `x-` applied to
/// `tools/example` yields `tools/x-example`, and applied to a bare
/// `example` yields `x-example`. Prefixes are not de-duplicated or
/// filtered; the list length is always `1 + prefixes.len()`.
pub fn candidate_names(module: &str, prefixes: &[String]) -> Vec<String> {
    let path = Path::new(module);
    let base = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(module);
    let dir = path.parent().filter(|d| !d.as_os_str().is_empty());

    let mut names = Vec::with_capacity(1 + prefixes.len());
    names.push(module.to_string());
    for prefix in prefixes {
        let prefixed = format!("{prefix}{base}");
        names.push(match dir {
            Some(dir) => dir.join(prefixed).to_string_lossy().into_owned(),
            None => prefixed,
        });
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes(items: &[&str]) -> Vec<String> {
        items.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn original_name_first_then_one_entry_per_prefix() {
        let names = candidate_names("example", &prefixes(&["x-", "y-"]));
        assert_eq!(names, vec!["example", "x-example", "y-example"]);
    }

    #[test]
    fn no_prefixes_yields_only_the_original() {
        let names = candidate_names("example", &[]);
        assert_eq!(names, vec!["example"]);
    }

    #[test]
    fn prefix_attaches_to_the_final_segment() {
        let names = candidate_names("tools/example", &prefixes(&["x-"]));
        assert_eq!(names, vec!["tools/example", "tools/x-example"]);
    }

    #[test]
    fn scoped_names_keep_their_scope_directory() {
        let names = candidate_names("@acme/example", &prefixes(&["gen-"]));
        assert_eq!(names, vec!["@acme/example", "@acme/gen-example"]);
    }

    #[test]
    fn duplicate_and_empty_prefixes_are_kept_verbatim() {
        let names = candidate_names("example", &prefixes(&["", "x-", "x-"]));
        assert_eq!(names, vec!["example", "example", "x-example", "x-example"]);
    }

    #[test]
    fn length_is_one_plus_prefix_count() {
        let p = prefixes(&["a-", "b-", "c-"]);
        assert_eq!(candidate_names("m", &p).len(), 1 + p.len());
    }
}
