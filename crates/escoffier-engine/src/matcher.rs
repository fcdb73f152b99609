// ABOUTME: Ingredient match scoring over the token-by-ingredient cross product
// ABOUTME: Accumulating counter feeding the tier thresholds, not a set intersection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! # Ingredient Matcher
//!
//! Scores how strongly a recipe's ingredient list covers a set of required
//! tokens. The score is a tiering signal, not a strict set match: every
//! (token, ingredient) pair in the cross product can contribute, so a single
//! token can accumulate more than one hit when several ingredients match it,
//! or when a multi-word ingredient name also matches at the word level. The
//! tier thresholds downstream are calibrated against exactly this behavior.

/// Count matches between a recipe's ingredient names and the required tokens.
///
/// A (token, ingredient) pair counts when the ingredient name contains the
/// token as a substring, or failing that, when any whitespace-delimited word
/// of the ingredient name is a substring of the token. Callers pass both
/// sides lower-cased.
#[must_use]
pub fn match_count(ingredient_names: &[String], required_tokens: &[String]) -> usize {
    let mut count = 0;
    for token in required_tokens {
        for name in ingredient_names {
            if name.contains(token.as_str()) {
                count += 1;
            } else if name.split_whitespace().any(|word| token.contains(word)) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    #[test]
    fn counts_direct_substring_hits() {
        let names = owned(&["egg", "flour", "milk"]);
        let tokens = owned(&["egg", "flour"]);
        assert_eq!(match_count(&names, &tokens), 2);
    }

    #[test]
    fn word_level_reverse_match_fires() {
        // "chicken" does not contain "chicken breast", but the word
        // "chicken" is a substring of the token.
        let names = owned(&["chicken"]);
        let tokens = owned(&["chicken breast"]);
        assert_eq!(match_count(&names, &tokens), 1);
    }

    #[test]
    fn one_token_can_accumulate_across_ingredients() {
        let names = owned(&["egg", "egg white", "egg yolk"]);
        let tokens = owned(&["egg"]);
        assert_eq!(match_count(&names, &tokens), 3);
    }

    #[test]
    fn empty_tokens_score_zero() {
        let names = owned(&["egg", "flour"]);
        assert_eq!(match_count(&names, &[]), 0);
    }
}
