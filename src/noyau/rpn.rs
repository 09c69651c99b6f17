// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur (ou AST pour la démarche)
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la syntaxe au passage
// - Évaluer la RPN avec une pile explicite (aucune récursion, profondeur quelconque)
// - Reconstruire Expr seulement pour l’affichage (profondeur bornée)
//
// Précédences (croissantes):
//   + -  (1, gauche)
//   * / // (2, gauche)
//   signe préfixe - + (3, droite)
//   ^    (4, droite)
// Donc -2^2 = -(2^2) et 2^-1 = 2^(-1).
//
// Validation (état `attend_valeur`):
// - un nombre ou '(' n’est admis que si on attend une valeur (pas de multiplication implicite)
// - ')' ou un opérateur binaire n’est admis qu’après une valeur
// - '+'/'-' là où on attend une valeur => signe préfixe

use crate::erreur::ErreurCalcul;

use super::expr::Expr;
use super::jetons::Tok;
use super::nombre::Nombre;

/// Profondeur max de l’arbre affiché (Display et Drop de Expr sont récursifs).
/// L’évaluation, elle, n’a pas de limite.
pub const PROFONDEUR_ARBRE_MAX: usize = 200;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::SlashSlash => 2,
        Tok::NegUnaire | Tok::PosUnaire => 3,
        Tok::Caret => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret | Tok::NegUnaire | Tok::PosUnaire)
}

fn symbole(t: &Tok) -> &'static str {
    match t {
        Tok::Plus => "+",
        Tok::Minus => "-",
        Tok::Star => "*",
        Tok::Slash => "/",
        Tok::SlashSlash => "//",
        Tok::Caret => "^",
        Tok::LPar => "(",
        Tok::RPar => ")",
        Tok::NegUnaire | Tok::PosUnaire => "signe",
        Tok::Num(_) => "nombre",
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Minus, Num(2), Caret, Num(2)]
///   rpn:    [Num(2), Num(2), Caret, NegUnaire]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    let mut attend_valeur = true;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if !attend_valeur {
                    return Err(ErreurCalcul::invalide("nombre inattendu après une valeur"));
                }
                out.push(tok);
                attend_valeur = false;
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(ErreurCalcul::invalide(
                        "'(' inattendue (multiplication implicite non supportée)",
                    ));
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err(ErreurCalcul::invalide("')' inattendue : opérande manquant"));
                }

                // dépile jusqu’à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err(ErreurCalcul::invalide("')' sans '(' correspondante"));
                }
            }

            // signe préfixe : ne dépile rien
            Tok::Plus | Tok::Minus if attend_valeur => {
                let unaire = if matches!(tok, Tok::Minus) {
                    Tok::NegUnaire
                } else {
                    Tok::PosUnaire
                };
                ops.push(unaire);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::SlashSlash | Tok::Caret => {
                if attend_valeur {
                    return Err(ErreurCalcul::invalide(format!(
                        "opérateur '{}' inattendu",
                        symbole(&tok)
                    )));
                }

                // dépile tant que la précédence/associativité l’exige (bloqué par '(')
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                attend_valeur = true;
            }

            Tok::NegUnaire | Tok::PosUnaire => {
                return Err(ErreurCalcul::invalide("jeton de signe inattendu en entrée"));
            }
        }
    }

    if attend_valeur {
        return Err(ErreurCalcul::invalide("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalcul::invalide("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

fn manquant() -> ErreurCalcul {
    ErreurCalcul::invalide("opérande manquant")
}

/// Évalue une RPN avec une pile de valeurs.
/// Ordre : opérande gauche puis droite, première erreur rencontrée.
pub fn evalue_rpn(rpn: &[Tok]) -> Result<Nombre, ErreurCalcul> {
    let mut pile: Vec<Nombre> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        let v = match tok {
            Tok::Num(r) => Nombre::Exact(r.clone()),

            Tok::NegUnaire => pile.pop().ok_or_else(manquant)?.oppose(),
            Tok::PosUnaire => pile.pop().ok_or_else(manquant)?,

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::SlashSlash | Tok::Caret => {
                let b = pile.pop().ok_or_else(manquant)?;
                let a = pile.pop().ok_or_else(manquant)?;

                match tok {
                    Tok::Plus => a.ajoute(&b)?,
                    Tok::Minus => a.soustrait(&b)?,
                    Tok::Star => a.multiplie(&b)?,
                    Tok::Slash => a.divise(&b)?,
                    Tok::SlashSlash => a.divise_entier(&b)?,
                    _ => a.puissance(&b)?,
                }
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalcul::invalide("parenthèse inattendue en RPN"))
            }
        };
        pile.push(v);
    }

    match (pile.pop(), pile.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurCalcul::invalide("expression invalide")),
    }
}

/// Construit une Expr à partir d’une RPN (pile de (noeud, profondeur)).
/// Refuse un arbre plus profond que `PROFONDEUR_ARBRE_MAX`.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurCalcul> {
    let mut st: Vec<(Expr, usize)> = Vec::new();

    for tok in rpn.iter().cloned() {
        let (e, prof) = match tok {
            Tok::Num(r) => (Expr::Rat(r), 1),

            Tok::NegUnaire => {
                let (a, pa) = st.pop().ok_or_else(manquant)?;
                (Expr::Neg(Box::new(a)), pa + 1)
            }
            // +x == x
            Tok::PosUnaire => st.pop().ok_or_else(manquant)?,

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::SlashSlash | Tok::Caret => {
                let (b, pb) = st.pop().ok_or_else(manquant)?;
                let (a, pa) = st.pop().ok_or_else(manquant)?;
                let (a, b) = (Box::new(a), Box::new(b));

                let e = match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    Tok::Slash => Expr::Div(a, b),
                    Tok::SlashSlash => Expr::DivEntiere(a, b),
                    _ => Expr::Puissance(a, b),
                };
                (e, pa.max(pb) + 1)
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalcul::invalide("parenthèse inattendue en RPN"))
            }
        };

        if prof > PROFONDEUR_ARBRE_MAX {
            return Err(ErreurCalcul::invalide(format!(
                "arbre trop profond pour être affiché (profondeur > {PROFONDEUR_ARBRE_MAX})"
            )));
        }
        st.push((e, prof));
    }

    match (st.pop(), st.is_empty()) {
        (Some((e, _)), true) => Ok(e),
        _ => Err(ErreurCalcul::invalide("expression invalide")),
    }
}
