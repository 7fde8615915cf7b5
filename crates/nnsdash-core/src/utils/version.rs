///
/// SemVer triple as reported by hardware wallet apps.
///

pub type Version = (u32, u32, u32);

#[must_use]
pub fn parse_version(text: &str) -> Option<Version> {
    let mut parts = text.trim().split('.').map(|p| p.parse::<u32>().ok());

    let major = parts.next()??;
    let minor = parts.next()??;
    let patch = parts.next()??;

    if parts.next().is_some() {
        return None;
    }

    Some((major, minor, patch))
}

/// `current < min`, tuple-ordered.
#[must_use]
pub fn smaller_version(current: Version, min: Version) -> bool {
    current < min
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triples_only() {
        assert_eq!(parse_version("2.0.6"), Some((2, 0, 6)));
        assert_eq!(parse_version("2.0"), None);
        assert_eq!(parse_version("2.0.6.1"), None);
        assert_eq!(parse_version("a.b.c"), None);
    }

    #[test]
    fn compares_component_wise() {
        assert!(smaller_version((1, 0, 10), (2, 0, 6)));
        assert!(!smaller_version((2, 0, 6), (2, 0, 6)));
        assert!(!smaller_version((3, 0, 10), (2, 0, 6)));
        assert!(smaller_version((2, 0, 5), (2, 0, 6)));
    }
}
