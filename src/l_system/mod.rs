//! The l_system module provides a simple Lindenmayer string rewriter whose
//! output a [`crate::turtle::Turtle`] can walk with
//! [`crate::turtle::Turtle::walk_lpath`].

use std::collections::HashMap;

/// # LSystem
///
/// An axiom plus one rewrite rule per symbol. Symbols without a rule are
/// copied through unchanged.
///
/// # Example
///
/// ```rust
/// use turtlegraphics::l_system::LSystem;
/// use turtlegraphics::turtle::Turtle;
/// use std::collections::HashMap;
///
/// let gosper = LSystem {
///     axiom: "A".to_string(),
///     rules: HashMap::from([
///         ('A', "A-B--B+A++AA+B-".to_string()),
///         ('B', "+A-BB--B-A++A+B".to_string())]),
/// };
///
/// let mut turtle = Turtle::new();
/// turtle.walk_lpath(&gosper.expand(2), 60.0, 8.0).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct LSystem {
    pub axiom: String,
    pub rules: HashMap<char, String>,
}

impl LSystem {
    fn rewrite(&self, state: &str) -> String {
        state
            .chars()
            .map(|c| match self.rules.get(&c) {
                Some(replacement) => replacement.clone(),
                None => String::from(c),
            })
            .collect()
    }

    /// Apply every rule simultaneously, `order` times over, starting from
    /// the axiom.
    pub fn expand(&self, order: u32) -> String {
        let mut state = self.axiom.clone();
        for _ in 0..order {
            state = self.rewrite(&state);
        }
        tracing::trace!(order, len = state.len(), "expanded l-system");
        state
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_expand_simple() {
        let system = LSystem {
            axiom: "A".to_string(),
            rules: HashMap::from([('A', "AB".to_string()), ('B', "A".to_string())]),
        };
        assert_eq!(system.expand(0), "A");
        assert_eq!(system.expand(2), "ABA");
        assert_eq!(system.expand(5), "ABAABABAABAAB");
    }

    #[test]
    fn test_unruled_symbols_survive() {
        let system = LSystem {
            axiom: "F+F".to_string(),
            rules: HashMap::from([('F', "F[-F]".to_string())]),
        };
        assert_eq!(system.expand(1), "F[-F]+F[-F]");
    }
}
