use crate::{LocaleDefinition, Options, Unit, UnitDefinition};

/// Rounds half-way cases towards positive infinity: `2.5` becomes `3` and
/// `-2.5` becomes `-2`.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Prints a number without a trailing `.0` and without a negative zero.
fn number(value: f64) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else {
        value.to_string()
    }
}

fn part(unit: &UnitDefinition, amount: f64, long: bool) -> String {
    if long {
        format!("{} {}", number(amount), unit.long(amount.abs()))
    } else {
        format!("{}{}", number(amount), unit.short())
    }
}

pub(crate) fn format(locale: &LocaleDefinition, ms: f64, options: &Options) -> String {
    if options.compound {
        compound(locale, ms, options)
    } else {
        simple(locale, ms, options.long)
    }
}

/// The largest unit not exceeding `|ms|`, rounded.
fn simple(locale: &LocaleDefinition, ms: f64, long: bool) -> String {
    let magnitude = ms.abs();
    for unit in Unit::DESCENDING {
        let value = unit.millis();
        if magnitude >= value {
            return part(locale.unit(unit), round_half_up(ms / value), long);
        }
    }
    part(locale.unit(Unit::Millisecond), ms, long)
}

/// Greedy decomposition over descending units. Fractions of a millisecond
/// are dropped.
fn compound(locale: &LocaleDefinition, ms: f64, options: &Options) -> String {
    let mut remaining = ms.abs();
    let mut parts = Vec::new();

    for unit in Unit::DESCENDING {
        let value = unit.millis();
        if remaining < value {
            continue;
        }

        let amount = (remaining / value).floor();
        remaining -= amount * value;

        if amount > 0.0 {
            parts.push(part(locale.unit(unit), amount, options.long));
            if options.max_units > 0 && parts.len() >= options.max_units {
                break;
            }
        }
    }

    if parts.is_empty() {
        parts.push(part(locale.unit(Unit::Millisecond), 0.0, options.long));
    }

    let sign = if ms < 0.0 { "-" } else { "" };
    let separator = if options.long { " " } else { "" };
    format!("{sign}{}", parts.join(separator))
}
