// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use crate::erreur::ErreurCalcul;

/// Seuls caractères admis (après suppression des espaces).
/// Aucun identifiant : la grammaire n’a ni noms, ni appels, ni accès membre.
pub const CARACTERES_AUTORISES: &str = "0123456789+-*/.()^";

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,
    SlashSlash, // division entière (plancher)
    Caret,      // puissance : ^ ou **

    // Produits par to_rpn seulement (signe préfixe)
    NegUnaire,
    PosUnaire,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// - espaces ignorés partout (retirés avant tout le reste : "2 3" se lit 23)
/// - caractères hors `CARACTERES_AUTORISES` refusés
/// - nombres : 12, 1.5, 1., .5 (lus exactement en rationnels)
/// - opérateurs + - * / // ^ ** et parenthèses
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();

    if chars.is_empty() {
        return Err(ErreurCalcul::invalide("entrée vide"));
    }
    if let Some(c) = chars.iter().find(|c| !CARACTERES_AUTORISES.contains(**c)) {
        return Err(ErreurCalcul::invalide(format!("caractère interdit : '{c}'")));
    }

    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];
        let suivant = chars.get(i + 1).copied();

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            '+' => out.push(Tok::Plus),
            '-' => out.push(Tok::Minus),
            '^' => out.push(Tok::Caret),
            '*' if suivant == Some('*') => {
                out.push(Tok::Caret);
                i += 1;
            }
            '*' => out.push(Tok::Star),
            '/' if suivant == Some('/') => {
                out.push(Tok::SlashSlash);
                i += 1;
            }
            '/' => out.push(Tok::Slash),
            _ => {
                // chiffre ou '.' : littéral numérique
                let (r, fin) = lire_nombre(&chars, i)?;
                out.push(Tok::Num(r));
                i = fin;
                continue;
            }
        }
        i += 1;
    }

    Ok(out)
}

/// Lit un littéral à partir de `debut` : chiffres, puis éventuellement '.' et chiffres.
/// Renvoie (valeur exacte, index de fin).
fn lire_nombre(chars: &[char], debut: usize) -> Result<(BigRational, usize), ErreurCalcul> {
    let mut i = debut;
    let mut entier = String::new();
    let mut frac = String::new();

    while i < chars.len() && chars[i].is_ascii_digit() {
        entier.push(chars[i]);
        i += 1;
    }
    let a_point = i < chars.len() && chars[i] == '.';
    if a_point {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            frac.push(chars[i]);
            i += 1;
        }
    }

    let texte: String = chars[debut..i].iter().collect();
    if entier.is_empty() && frac.is_empty() {
        return Err(ErreurCalcul::invalide(format!("nombre mal formé : '{texte}'")));
    }
    if i < chars.len() && chars[i] == '.' {
        return Err(ErreurCalcul::invalide(format!("nombre mal formé : '{texte}.'")));
    }
    // entier sans point : pas de zéro non significatif ("007"), sauf "0", "00"…
    let zero_de_tete = entier.len() > 1 && entier.starts_with('0');
    if !a_point && zero_de_tete && entier.contains(|c: char| c != '0') {
        return Err(ErreurCalcul::invalide(format!(
            "zéro non significatif interdit : '{texte}'"
        )));
    }

    // "12.34" -> 1234 / 10^2
    let chiffres = format!("{entier}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .ok_or_else(|| ErreurCalcul::invalide(format!("nombre invalide : '{texte}'")))?;
    let d = if frac.is_empty() {
        BigInt::one()
    } else {
        BigInt::from(10).pow(frac.len() as u32)
    };

    Ok((BigRational::new(n, d), i))
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => format_rat(r),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::SlashSlash => "//".to_string(),
            Tok::Caret => "^".to_string(),

            Tok::NegUnaire => "neg".to_string(),
            Tok::PosUnaire => "pos".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rat(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn invalide(s: &str) -> String {
        match tokenize(s) {
            Err(ErreurCalcul::ExpressionInvalide(m)) => m,
            autre => panic!("tokenize({s:?}) aurait dû échouer, obtenu {autre:?}"),
        }
    }

    #[test]
    fn operateurs_et_parentheses() {
        let t = tokenize("(1+2)*3/4-5^6").unwrap();
        assert_eq!(
            t,
            vec![
                Tok::LPar,
                Tok::Num(rat(1, 1)),
                Tok::Plus,
                Tok::Num(rat(2, 1)),
                Tok::RPar,
                Tok::Star,
                Tok::Num(rat(3, 1)),
                Tok::Slash,
                Tok::Num(rat(4, 1)),
                Tok::Minus,
                Tok::Num(rat(5, 1)),
                Tok::Caret,
                Tok::Num(rat(6, 1)),
            ]
        );
    }

    #[test]
    fn doubles_operateurs() {
        assert_eq!(
            tokenize("2**3").unwrap(),
            vec![Tok::Num(rat(2, 1)), Tok::Caret, Tok::Num(rat(3, 1))]
        );
        assert_eq!(
            tokenize("7//2").unwrap(),
            vec![Tok::Num(rat(7, 1)), Tok::SlashSlash, Tok::Num(rat(2, 1))]
        );
        // "***" : puissance puis produit (la syntaxe tranchera)
        assert_eq!(
            tokenize("2***3").unwrap(),
            vec![Tok::Num(rat(2, 1)), Tok::Caret, Tok::Star, Tok::Num(rat(3, 1))]
        );
    }

    #[test]
    fn decimaux_exacts() {
        assert_eq!(tokenize("3.14").unwrap(), vec![Tok::Num(rat(314, 100))]);
        assert_eq!(tokenize(".5").unwrap(), vec![Tok::Num(rat(1, 2))]);
        assert_eq!(tokenize("1.").unwrap(), vec![Tok::Num(rat(1, 1))]);
        assert_eq!(tokenize("0.5").unwrap(), vec![Tok::Num(rat(1, 2))]);
        assert_eq!(tokenize("007.5").unwrap(), vec![Tok::Num(rat(15, 2))]);
        assert_eq!(tokenize("00").unwrap(), vec![Tok::Num(rat(0, 1))]);
    }

    #[test]
    fn zero_non_significatif_refuse() {
        assert!(invalide("007").contains("zéro non significatif"));
        assert!(invalide("1+01").contains("'01'"));
        assert_eq!(tokenize("10").unwrap(), vec![Tok::Num(rat(10, 1))]);
        assert_eq!(tokenize("0").unwrap(), vec![Tok::Num(rat(0, 1))]);
    }

    #[test]
    fn espaces_retires_partout() {
        assert_eq!(tokenize(" 2 3 ").unwrap(), vec![Tok::Num(rat(23, 1))]);
        assert_eq!(tokenize("1 . 5").unwrap(), vec![Tok::Num(rat(3, 2))]);
        assert_eq!(tokenize("\t2\n+\r3").unwrap().len(), 3);
    }

    #[test]
    fn entree_vide() {
        assert!(invalide("").contains("vide"));
        assert!(invalide("   ").contains("vide"));
    }

    #[test]
    fn caracteres_interdits() {
        assert!(invalide("2 + abc").contains("'a'"));
        assert!(invalide("2 + $").contains("'$'"));
        assert!(invalide("import os").contains("caractère interdit"));
        assert!(invalide("2 % 3").contains("'%'"));
        assert!(invalide("π").contains("'π'"));
    }

    #[test]
    fn nombres_mal_formes() {
        assert!(invalide(".").contains("mal formé"));
        assert!(invalide("1.2.3").contains("mal formé"));
        assert!(invalide("2+.").contains("mal formé"));
    }

    #[test]
    fn format_tokens_lisible() {
        let t = tokenize("1.5 // 2").unwrap();
        assert_eq!(format_tokens(&t), "3/2 // 2");
    }
}
