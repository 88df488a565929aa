//! Text form of multinomials.
//!
//! The grammar matches the `Display` output of [`Multinomial`]:
//!
//! ```text
//! expression := ['-'] term (('+'|'-') term)*
//! term       := factor ('*' factor)*
//! factor     := number | 'Sqr' digits | identifier ['^' exponent]
//! number     := digits ['/' digits]
//! exponent   := ['-'] digits ['/' digits]
//! ```
//!
//! Identifiers are maximal runs of alphabetic characters, so `Pi`, `e`
//! and `i` parse as ordinary characters. Whitespace between tokens is
//! ignored.

use std::str::FromStr;

use num_traits::One;
use operad_rational::{IBig, Rational};

use operad_calc::{CalcError, CalcResult};

use crate::multinomial::Multinomial;
use crate::term::Term;

/// Parses the text form of a multinomial.
///
/// # Errors
///
/// [`CalcError::InvalidArgument`] when the input does not match the
/// grammar, including a zero denominator.
pub fn parse_multinomial(input: &str) -> CalcResult<Multinomial> {
    Parser::new(input).parse()
}

impl FromStr for Multinomial {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_multinomial(s)
    }
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    fn parse(mut self) -> CalcResult<Multinomial> {
        let mut terms = Vec::new();
        self.skip_space();
        let mut negative = self.eat('-');
        loop {
            terms.push(self.term(negative)?);
            self.skip_space();
            match self.chars.next() {
                None => break,
                Some('+') => negative = false,
                Some('-') => negative = true,
                Some(c) => {
                    return Err(CalcError::invalid(format!("unexpected character '{c}'")));
                }
            }
        }
        Ok(Multinomial::from_terms(terms))
    }

    fn term(&mut self, negative: bool) -> CalcResult<Term> {
        let mut coefficient = if negative {
            -Rational::one()
        } else {
            Rational::one()
        };
        let mut radical = IBig::ONE;
        let mut characters = std::collections::BTreeMap::new();
        loop {
            self.skip_space();
            match self.chars.peek() {
                Some(c) if c.is_ascii_digit() => {
                    coefficient = coefficient * self.number()?;
                }
                Some(c) if c.is_alphabetic() => {
                    let name = self.identifier();
                    if name == "Sqr" && self.peek_digit() {
                        radical *= self.digits()?;
                    } else {
                        let exponent = if self.eat('^') {
                            self.exponent()?
                        } else {
                            Rational::one()
                        };
                        let merged = exponent
                            + characters
                                .remove(&name)
                                .unwrap_or_else(num_traits::Zero::zero);
                        characters.insert(name, merged);
                    }
                }
                _ => return Err(CalcError::invalid("expected a factor")),
            }
            self.skip_space();
            if !self.eat('*') {
                break;
            }
        }
        if radical <= IBig::ZERO {
            return Err(CalcError::invalid("radicand must be positive"));
        }
        Ok(Term::new(coefficient, radical, characters))
    }

    fn number(&mut self) -> CalcResult<Rational> {
        let numerator = self.digits()?;
        if self.eat('/') {
            let denominator = self.digits()?;
            if denominator == IBig::ZERO {
                return Err(CalcError::invalid("denominator is zero"));
            }
            Ok(Rational::new(numerator, denominator))
        } else {
            Ok(Rational::from(numerator))
        }
    }

    fn exponent(&mut self) -> CalcResult<Rational> {
        let negative = self.eat('-');
        let q = self.number()?;
        Ok(if negative { -q } else { q })
    }

    fn digits(&mut self) -> CalcResult<IBig> {
        let mut s = String::new();
        while let Some(c) = self.chars.peek() {
            if c.is_ascii_digit() {
                s.push(*c);
                self.chars.next();
            } else {
                break;
            }
        }
        if s.is_empty() {
            return Err(CalcError::invalid("expected digits"));
        }
        s.parse()
            .map_err(|_| CalcError::invalid("integer out of range"))
    }

    fn identifier(&mut self) -> String {
        let mut s = String::new();
        while let Some(c) = self.chars.peek() {
            if c.is_alphabetic() {
                s.push(*c);
                self.chars.next();
            } else {
                break;
            }
        }
        s
    }

    fn peek_digit(&mut self) -> bool {
        self.chars.peek().is_some_and(char::is_ascii_digit)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.chars.peek() == Some(&expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn skip_space(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.chars.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    #[test]
    fn parses_constants_and_characters() {
        assert_eq!(parse_multinomial("3").unwrap(), Multinomial::from_i64(3));
        assert_eq!(
            parse_multinomial("2/3").unwrap(),
            Multinomial::from_rational(r(2, 3))
        );
        assert_eq!(parse_multinomial("x").unwrap(), Multinomial::character("x"));
        assert_eq!(parse_multinomial("Pi").unwrap(), Multinomial::pi());
    }

    #[test]
    fn parses_full_terms() {
        let m = parse_multinomial("-2/3*Sqr2*x^2*y").unwrap();
        let t = m.as_monomial().unwrap();
        assert_eq!(t.coefficient(), &r(-2, 3));
        assert_eq!(t.radical(), &IBig::from(2));
        assert_eq!(t.exponent_of("x"), r(2, 1));
        assert_eq!(t.exponent_of("y"), r(1, 1));
    }

    #[test]
    fn parses_signed_sums() {
        let m = parse_multinomial("x^2 - 2*x + 1").unwrap();
        assert_eq!(m.terms().len(), 3);
        assert_eq!(
            m,
            Multinomial::character("x")
                .pow(2)
                .subtract(&Multinomial::character("x").scale(&r(2, 1)))
                .add(&Multinomial::one())
        );
    }

    #[test]
    fn parses_fractional_and_negative_exponents() {
        let m = parse_multinomial("x^1/2").unwrap();
        assert_eq!(m.as_monomial().unwrap().exponent_of("x"), r(1, 2));
        let m = parse_multinomial("2*x^-3").unwrap();
        assert_eq!(m.as_monomial().unwrap().exponent_of("x"), r(-3, 1));
    }

    #[test]
    fn display_round_trips() {
        for text in ["0", "1/2*Sqr2", "-1 + x", "2 - 1/2*x", "1/2*Pi", "x^2*y - 3"] {
            let m = parse_multinomial(text).unwrap();
            assert_eq!(parse_multinomial(&m.to_string()).unwrap(), m);
        }
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_multinomial("").is_err());
        assert!(parse_multinomial("1/0").is_err());
        assert!(parse_multinomial("x +").is_err());
        assert!(parse_multinomial("2 ? 3").is_err());
        assert!(parse_multinomial("Sqr0").is_err());
    }
}
