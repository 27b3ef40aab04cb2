//! Field validation for the form panels.
//!
//! Validation runs in two passes. The first pass checks the operation's
//! required fields for blankness and marks every offender at once, so the
//! user sees all missing inputs together instead of fixing them one by one.
//! The second pass parses individual fields into their typed values, each
//! failure producing its own message.
//!
//! Every helper updates [`FieldMarks`] for the fields it inspects, clearing
//! stale marks on success so a corrected field stops being highlighted on
//! the next attempt.

use crate::forms::{Field, FieldMarks, FormState};

/// Blank-check pass. Marks every blank field in `fields` and returns whether
/// all of them were filled.
pub fn require_filled(fields: &[Field], form: &FormState, marks: &mut FieldMarks) -> bool {
    let mut all_filled = true;
    for &field in fields {
        if form.is_blank(field) {
            marks.mark_invalid(field);
            all_filled = false;
        } else {
            marks.mark_valid(field);
        }
    }
    all_filled
}

/// Message naming every blank field in `fields`, in display order.
pub fn missing_fields_message(fields: &[Field], form: &FormState) -> String {
    let labels: Vec<&str> = fields
        .iter()
        .copied()
        .filter(|&field| form.is_blank(field))
        .map(Field::label)
        .collect();
    format!("Please fill in: {}", labels.join(", "))
}

/// Parses a whole-number identifier field.
pub fn parse_id(field: Field, form: &FormState, marks: &mut FieldMarks) -> Result<i64, String> {
    match form.get(field).trim().parse::<i64>() {
        Ok(value) => {
            marks.mark_valid(field);
            Ok(value)
        }
        Err(_) => {
            marks.mark_invalid(field);
            Err(format!("{} must be a whole number", field.label()))
        }
    }
}

/// Like [`parse_id`], but a blank field is `Ok(None)` rather than an error.
/// Used by order update, where blank fields defer to the server's values.
pub fn parse_optional_id(
    field: Field,
    form: &FormState,
    marks: &mut FieldMarks,
) -> Result<Option<i64>, String> {
    if form.is_blank(field) {
        marks.mark_valid(field);
        return Ok(None);
    }
    parse_id(field, form, marks).map(Some)
}

/// Parses a quantity field: a whole number between zero and `u32::MAX`.
pub fn parse_quantity(
    field: Field,
    form: &FormState,
    marks: &mut FieldMarks,
) -> Result<u32, String> {
    let value: i64 = match form.get(field).trim().parse() {
        Ok(value) => value,
        Err(_) => {
            marks.mark_invalid(field);
            return Err(format!("{} must be a whole number", field.label()));
        }
    };
    if value < 0 {
        marks.mark_invalid(field);
        return Err(format!("{} must not be negative", field.label()));
    }
    match u32::try_from(value) {
        Ok(value) => {
            marks.mark_valid(field);
            Ok(value)
        }
        Err(_) => {
            marks.mark_invalid(field);
            Err(format!("{} is too large", field.label()))
        }
    }
}

/// Parses a price field: a finite number that must not be negative.
pub fn parse_price(field: Field, form: &FormState, marks: &mut FieldMarks) -> Result<f64, String> {
    let value: f64 = match form.get(field).trim().parse() {
        Ok(value) => value,
        Err(_) => {
            marks.mark_invalid(field);
            return Err(format!("{} must be a number", field.label()));
        }
    };
    // "NaN" and "inf" parse successfully but are meaningless as prices.
    if !value.is_finite() {
        marks.mark_invalid(field);
        return Err(format!("{} must be a number", field.label()));
    }
    if value < 0.0 {
        marks.mark_invalid(field);
        return Err(format!("{} must not be negative", field.label()));
    }
    marks.mark_valid(field);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_filled_marks_every_blank_field() {
        let mut form = FormState::default();
        form.set(Field::Address, "1 Main St");
        let mut marks = FieldMarks::default();

        let required = [Field::CustomerId, Field::Address, Field::Status];
        assert!(!require_filled(&required, &form, &mut marks));
        assert!(marks.is_invalid(Field::CustomerId));
        assert!(marks.is_invalid(Field::Status));
        assert!(!marks.is_invalid(Field::Address));
    }

    #[test]
    fn require_filled_clears_stale_marks_on_success() {
        let mut form = FormState::default();
        let mut marks = FieldMarks::default();
        assert!(!require_filled(&[Field::CustomerId], &form, &mut marks));

        form.set(Field::CustomerId, "7");
        assert!(require_filled(&[Field::CustomerId], &form, &mut marks));
        assert!(!marks.is_invalid(Field::CustomerId));
    }

    #[test]
    fn missing_fields_message_names_blanks_in_order() {
        let mut form = FormState::default();
        form.set(Field::Address, "1 Main St");
        let message =
            missing_fields_message(&[Field::CustomerId, Field::Address, Field::Status], &form);
        assert_eq!(message, "Please fill in: Customer ID, Status");
    }

    #[test]
    fn parse_id_rejects_non_numeric_input() {
        let mut form = FormState::default();
        form.set(Field::OrderId, "abc");
        let mut marks = FieldMarks::default();
        let err = parse_id(Field::OrderId, &form, &mut marks).unwrap_err();
        assert_eq!(err, "Order ID must be a whole number");
        assert!(marks.is_invalid(Field::OrderId));
    }

    #[test]
    fn parse_id_accepts_surrounding_whitespace() {
        let mut form = FormState::default();
        form.set(Field::OrderId, " 42 ");
        let mut marks = FieldMarks::default();
        assert_eq!(parse_id(Field::OrderId, &form, &mut marks), Ok(42));
        assert!(!marks.is_invalid(Field::OrderId));
    }

    #[test]
    fn parse_optional_id_treats_blank_as_none() {
        let form = FormState::default();
        let mut marks = FieldMarks::default();
        assert_eq!(parse_optional_id(Field::CustomerId, &form, &mut marks), Ok(None));
        assert!(!marks.is_invalid(Field::CustomerId));
    }

    #[test]
    fn parse_optional_id_still_rejects_garbage() {
        let mut form = FormState::default();
        form.set(Field::CustomerId, "seven");
        let mut marks = FieldMarks::default();
        assert!(parse_optional_id(Field::CustomerId, &form, &mut marks).is_err());
        assert!(marks.is_invalid(Field::CustomerId));
    }

    #[test]
    fn parse_quantity_rejects_negative_values() {
        let mut form = FormState::default();
        form.set(Field::Quantity, "-2");
        let mut marks = FieldMarks::default();
        let err = parse_quantity(Field::Quantity, &form, &mut marks).unwrap_err();
        assert_eq!(err, "Quantity must not be negative");
        assert!(marks.is_invalid(Field::Quantity));
    }

    #[test]
    fn parse_quantity_rejects_fractional_values() {
        let mut form = FormState::default();
        form.set(Field::Quantity, "1.5");
        let mut marks = FieldMarks::default();
        let err = parse_quantity(Field::Quantity, &form, &mut marks).unwrap_err();
        assert_eq!(err, "Quantity must be a whole number");
    }

    #[test]
    fn parse_quantity_accepts_zero() {
        let mut form = FormState::default();
        form.set(Field::Quantity, "0");
        let mut marks = FieldMarks::default();
        assert_eq!(parse_quantity(Field::Quantity, &form, &mut marks), Ok(0));
    }

    #[test]
    fn parse_quantity_rejects_oversized_values() {
        let mut form = FormState::default();
        form.set(Field::Quantity, "4294967296");
        let mut marks = FieldMarks::default();
        let err = parse_quantity(Field::Quantity, &form, &mut marks).unwrap_err();
        assert_eq!(err, "Quantity is too large");
        assert!(marks.is_invalid(Field::Quantity));

        // The largest representable quantity still passes.
        form.set(Field::Quantity, "4294967295");
        assert_eq!(
            parse_quantity(Field::Quantity, &form, &mut marks),
            Ok(u32::MAX)
        );
        assert!(!marks.is_invalid(Field::Quantity));
    }

    #[test]
    fn parse_price_rejects_negative_values() {
        let mut form = FormState::default();
        form.set(Field::Price, "-0.5");
        let mut marks = FieldMarks::default();
        let err = parse_price(Field::Price, &form, &mut marks).unwrap_err();
        assert_eq!(err, "Price must not be negative");
    }

    #[test]
    fn parse_price_rejects_nan_and_infinity() {
        let mut form = FormState::default();
        let mut marks = FieldMarks::default();
        for raw in ["NaN", "inf", "-inf"] {
            form.set(Field::Price, raw);
            let err = parse_price(Field::Price, &form, &mut marks).unwrap_err();
            assert_eq!(err, "Price must be a number");
        }
    }

    #[test]
    fn parse_price_accepts_decimals() {
        let mut form = FormState::default();
        form.set(Field::Price, "1.50");
        let mut marks = FieldMarks::default();
        assert_eq!(parse_price(Field::Price, &form, &mut marks), Ok(1.5));
    }
}
