use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::domain::ExampleProgram;

/// The fixed example catalog. Defined once, never mutated; both front ends
/// serve it from here so the entries cannot drift apart.
pub const EXAMPLES: [ExampleProgram; 4] = [
    ExampleProgram {
        key: "simple_io",
        name: "Simple I/O",
        code: "nexus {
    shard core x, y;
    listen x;
    listen y;
    shard core sum = x + y;
    broadcast sum;
}",
    },
    ExampleProgram {
        key: "conditional",
        name: "If/Else Statement",
        code: "nexus {
    shard core x;
    listen x;
    probe (x > 0) {
        broadcast \"Positive\";
    } fallback {
        broadcast \"Non-positive\";
    }
}",
    },
    ExampleProgram {
        key: "loop",
        name: "While Loop",
        code: "nexus {
    shard core i = 1;
    pulse (i <= 5) {
        broadcast i;
        i = i + 1;
    }
}",
    },
    ExampleProgram {
        key: "factorial",
        name: "Factorial Calculator",
        code: "nexus {
    shard core n;
    listen n;

    shard core factorial = 1;
    shard core i = 1;

    pulse (i <= n) {
        factorial = factorial * i;
        i = i + 1;
    }

    broadcast factorial;
}",
    },
];

/// Wire shape of one catalog entry.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ExampleEntry {
    pub name: &'static str,
    pub code: &'static str,
}

/// The full key → entry mapping. BTreeMap keeps the serialization order
/// stable, so repeated calls produce byte-identical documents.
pub fn all() -> BTreeMap<&'static str, ExampleEntry> {
    EXAMPLES
        .iter()
        .map(|example| {
            (
                example.key,
                ExampleEntry {
                    name: example.name,
                    code: example.code,
                },
            )
        })
        .collect()
}

pub fn find(key: &str) -> Option<&'static ExampleProgram> {
    EXAMPLES.iter().find(|example| example.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_the_four_programs() {
        let examples = all();

        assert_eq!(
            examples.keys().copied().collect::<Vec<_>>(),
            vec!["conditional", "factorial", "loop", "simple_io"]
        );
    }

    #[test]
    fn repeated_calls_are_byte_identical() {
        let first = serde_json::to_string(&all()).unwrap();
        let second = serde_json::to_string(&all()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn find_returns_the_requested_program() {
        let example = find("factorial").unwrap();

        assert_eq!(example.name, "Factorial Calculator");
        assert!(example.code.contains("pulse (i <= n)"));
    }

    #[test]
    fn find_returns_none_for_unknown_key() {
        assert!(find("fibonacci").is_none());
    }
}
