use super::{LocaleDefinition, UnitDefinition};

impl LocaleDefinition {
    /// English (`en`).
    pub fn english() -> Self {
        Self {
            millisecond: UnitDefinition::plural(
                "ms",
                "millisecond",
                "milliseconds",
                ["milliseconds", "millisecond", "msecs", "msec", "ms"],
            ),
            second: UnitDefinition::plural(
                "s",
                "second",
                "seconds",
                ["seconds", "second", "secs", "sec", "s"],
            ),
            minute: UnitDefinition::plural(
                "m",
                "minute",
                "minutes",
                ["minutes", "minute", "mins", "min", "m"],
            ),
            hour: UnitDefinition::plural("h", "hour", "hours", ["hours", "hour", "hrs", "hr", "h"]),
            day: UnitDefinition::plural("d", "day", "days", ["days", "day", "d"]),
            week: UnitDefinition::plural("w", "week", "weeks", ["weeks", "week", "w"]),
            month: UnitDefinition::plural("mo", "month", "months", ["months", "month", "mo"]),
            year: UnitDefinition::plural("y", "year", "years", ["years", "year", "yrs", "yr", "y"]),
        }
    }

    /// French (`fr`).
    pub fn french() -> Self {
        Self {
            millisecond: UnitDefinition::plural(
                "ms",
                "milliseconde",
                "millisecondes",
                ["millisecondes", "milliseconde", "ms"],
            ),
            second: UnitDefinition::plural(
                "s",
                "seconde",
                "secondes",
                ["secondes", "seconde", "secs", "sec", "s"],
            ),
            minute: UnitDefinition::plural(
                "m",
                "minute",
                "minutes",
                ["minutes", "minute", "mins", "min", "m"],
            ),
            hour: UnitDefinition::plural("h", "heure", "heures", ["heures", "heure", "h"]),
            day: UnitDefinition::plural("j", "jour", "jours", ["jours", "jour", "j"]),
            week: UnitDefinition::plural(
                "sem",
                "semaine",
                "semaines",
                ["semaines", "semaine", "sem"],
            ),
            month: UnitDefinition::invariant("mo", "mois", ["mois", "mo"]),
            year: UnitDefinition::plural(
                "an",
                "année",
                "années",
                ["années", "annees", "année", "annee", "ans", "an"],
            ),
        }
    }

    /// German (`de`).
    pub fn german() -> Self {
        Self {
            millisecond: UnitDefinition::plural(
                "ms",
                "Millisekunde",
                "Millisekunden",
                ["millisekunden", "millisekunde", "ms"],
            ),
            second: UnitDefinition::plural(
                "s",
                "Sekunde",
                "Sekunden",
                ["sekunden", "sekunde", "seks", "sek", "s"],
            ),
            minute: UnitDefinition::plural(
                "m",
                "Minute",
                "Minuten",
                ["minuten", "minute", "mins", "min", "m"],
            ),
            hour: UnitDefinition::plural(
                "h",
                "Stunde",
                "Stunden",
                ["stunden", "stunde", "hrs", "hr", "h"],
            ),
            day: UnitDefinition::plural("t", "Tag", "Tage", ["tage", "tag", "t", "d"]),
            week: UnitDefinition::plural("w", "Woche", "Wochen", ["wochen", "woche", "wo", "w"]),
            month: UnitDefinition::plural(
                "mo",
                "Monat",
                "Monate",
                ["monate", "monat", "mon", "mo"],
            ),
            year: UnitDefinition::plural("j", "Jahr", "Jahre", ["jahre", "jahr", "j", "y"]),
        }
    }

    /// Spanish (`es`).
    pub fn spanish() -> Self {
        Self {
            millisecond: UnitDefinition::plural(
                "ms",
                "milisegundo",
                "milisegundos",
                ["milisegundos", "milisegundo", "ms"],
            ),
            second: UnitDefinition::plural("s", "segundo", "segundos", ["segundos", "segundo", "s"]),
            minute: UnitDefinition::plural(
                "min",
                "minuto",
                "minutos",
                ["minutos", "minuto", "mins", "min", "m"],
            ),
            hour: UnitDefinition::plural("h", "hora", "horas", ["horas", "hora", "hrs", "hr", "h"]),
            day: UnitDefinition::plural("d", "día", "días", ["días", "dias", "día", "dia", "d"]),
            week: UnitDefinition::plural("sem", "semana", "semanas", ["semanas", "semana", "sem"]),
            month: UnitDefinition::plural("mes", "mes", "meses", ["meses", "mes", "mo"]),
            year: UnitDefinition::plural("a", "año", "años", ["años", "anos", "año", "ano", "a"]),
        }
    }
}
