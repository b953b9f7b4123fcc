//! Display names of minimization algorithms.
//!
//! A minimizer is named after its type: `my_crate::tabular::QuineMcCluskey`
//! becomes `tabular-QuineMcCluskey`.

/// Separator placed between path segments in a display name.
pub const NAME_SEPARATOR: &str = "-";

/// Strips `prefix` from a type path and joins the remaining segments with [`NAME_SEPARATOR`].
///
/// Generic arguments are dropped.
pub fn normalize_algorithm_name(type_name: &str, prefix: &str) -> String {
    let path = match type_name.find('<') {
        Some(pos) => &type_name[..pos],
        None => type_name,
    };
    let path = path.strip_prefix(prefix).unwrap_or(path);
    path.trim_start_matches("::").replace("::", NAME_SEPARATOR)
}

/// Display name of type `T`, without its crate segment.
pub fn algorithm_name<T: ?Sized>() -> String {
    let type_name = std::any::type_name::<T>();
    let root = match type_name.find("::") {
        Some(pos) if !type_name[..pos].contains('<') => &type_name[..pos],
        _ => "",
    };
    normalize_algorithm_name(type_name, root)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    mod tabular {
        pub struct QuineMcCluskey;
        pub struct Generic<T>(pub T);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize_algorithm_name("qm::algorithms::tabular::Petrick", "qm::algorithms"),
            "tabular-Petrick"
        );
        assert_eq!(normalize_algorithm_name("Petrick", "qm::"), "Petrick");
        assert_eq!(normalize_algorithm_name("a::b::C<x::Y>", "a::"), "b-C");
        assert_eq!(normalize_algorithm_name("other::Name", "qm"), "other-Name");
    }

    #[test]
    fn test_algorithm_name_from_type() {
        assert_eq!(
            algorithm_name::<tabular::QuineMcCluskey>(),
            "algorithm-tests-tabular-QuineMcCluskey"
        );
        assert_eq!(
            algorithm_name::<tabular::Generic<u8>>(),
            "algorithm-tests-tabular-Generic"
        );
    }

    #[test]
    fn test_algorithm_name_without_path() {
        assert_eq!(algorithm_name::<u32>(), "u32");
    }
}
