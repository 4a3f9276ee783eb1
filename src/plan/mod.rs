//! Slot planning for the generated vector table.
//!
//! Two pure phases: [`skip_index`] decides whether the leading dash in the
//! extracted column stands for the reserved stack-pointer slot and should be
//! dropped, and [`build_plan`] lays out the final slot sequence. Keeping the
//! policy separate from emission lets each be tested on its own.

use crate::sanitize::sanitize_identifier;

/// One element of the emitted initializer array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorSlot {
    /// Initial stack-pointer value, always the first element.
    Reserved,
    /// Unused vector, emitted as a literal zero.
    Placeholder,
    /// Address of a named handler symbol.
    Handler(String),
}

/// Ordered slots plus the identifiers needing weak-alias declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionPlan {
    pub slots: Vec<VectorSlot>,
    pub aliases: Vec<String>,
}

fn is_placeholder(entry: &str) -> bool {
    entry.trim() == "-"
}

/// Decide which entry, if any, to elide from the emitted array.
///
/// A dash that appears before the first named vector duplicates the reserved
/// stack-pointer slot, so with `skip_mode` on it is dropped. A dash after
/// the first named vector is a genuinely unused slot and always stays. At
/// most one entry is ever elided, and only the first dash qualifies.
pub fn skip_index(entries: &[String], skip_mode: bool) -> Option<usize> {
    if !skip_mode {
        return None;
    }

    let mut first_dash = None;
    let mut first_real = None;
    for (i, entry) in entries.iter().enumerate() {
        if is_placeholder(entry) {
            if first_dash.is_none() {
                first_dash = Some(i);
            }
        } else if first_real.is_none() {
            first_real = Some(i);
        }
    }

    match (first_dash, first_real) {
        (Some(dash), Some(real)) if dash < real => Some(dash),
        (Some(dash), None) => Some(dash),
        _ => None,
    }
}

/// Build the ordered slot sequence and alias list for `entries`.
///
/// Slot order mirrors entry order exactly, behind the unconditional
/// [`VectorSlot::Reserved`] prefix; the entry at `skip` (if any) contributes
/// no slot at all. Aliases are collected in encounter order; repeated
/// names each keep their own declaration.
pub fn build_plan(entries: &[String], skip: Option<usize>) -> EmissionPlan {
    let mut slots = vec![VectorSlot::Reserved];
    let mut aliases = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        if skip == Some(i) {
            continue;
        }
        if is_placeholder(entry) {
            slots.push(VectorSlot::Placeholder);
        } else {
            let ident = sanitize_identifier(entry);
            aliases.push(ident.clone());
            slots.push(VectorSlot::Handler(ident));
        }
    }

    EmissionPlan { slots, aliases }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn leading_dash_is_skipped_in_skip_mode() {
        let e = entries(&["-", "-", "USART1", "-", "EXTI0"]);
        assert_eq!(skip_index(&e, true), Some(0));

        let plan = build_plan(&e, Some(0));
        assert_eq!(
            plan.slots,
            vec![
                VectorSlot::Reserved,
                VectorSlot::Placeholder,
                VectorSlot::Handler("USART1".into()),
                VectorSlot::Placeholder,
                VectorSlot::Handler("EXTI0".into()),
            ]
        );
        assert_eq!(plan.aliases, vec!["USART1", "EXTI0"]);
    }

    #[test]
    fn skip_mode_off_keeps_every_dash() {
        let e = entries(&["-", "-", "USART1", "-", "EXTI0"]);
        assert_eq!(skip_index(&e, false), None);

        let plan = build_plan(&e, None);
        assert_eq!(
            plan.slots,
            vec![
                VectorSlot::Reserved,
                VectorSlot::Placeholder,
                VectorSlot::Placeholder,
                VectorSlot::Handler("USART1".into()),
                VectorSlot::Placeholder,
                VectorSlot::Handler("EXTI0".into()),
            ]
        );
    }

    #[test]
    fn dash_after_first_real_entry_is_never_skipped() {
        let e = entries(&["WWDG", "-", "PVD"]);
        assert_eq!(skip_index(&e, true), None);
    }

    #[test]
    fn all_dash_column_skips_only_the_first() {
        let e = entries(&["-", "-", "-"]);
        assert_eq!(skip_index(&e, true), Some(0));

        let plan = build_plan(&e, Some(0));
        assert_eq!(
            plan.slots,
            vec![
                VectorSlot::Reserved,
                VectorSlot::Placeholder,
                VectorSlot::Placeholder,
            ]
        );
        assert!(plan.aliases.is_empty());
    }

    #[test]
    fn no_dash_makes_skip_mode_unobservable() {
        let e = entries(&["WWDG", "PVD", "TAMP_STAMP"]);
        assert_eq!(skip_index(&e, true), None);
        assert_eq!(skip_index(&e, false), None);
        assert_eq!(build_plan(&e, None).slots.len(), 4);
    }

    #[test]
    fn repeated_names_keep_one_alias_each() {
        let e = entries(&["TIM1", "TIM1", "TIM-1"]);
        let plan = build_plan(&e, None);
        assert_eq!(plan.aliases, vec!["TIM1", "TIM1", "TIM_1"]);
    }

    #[test]
    fn empty_cells_are_handlers_not_placeholders() {
        let e = entries(&["", "-"]);
        let plan = build_plan(&e, None);
        assert_eq!(
            plan.slots,
            vec![
                VectorSlot::Reserved,
                VectorSlot::Handler(String::new()),
                VectorSlot::Placeholder,
            ]
        );
        assert_eq!(plan.aliases, vec![""]);
    }

    #[test]
    fn padded_dash_counts_as_placeholder() {
        let e = entries(&[" - ", "WWDG"]);
        assert_eq!(skip_index(&e, true), Some(0));
    }
}
