use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::optimizer::{Plan, Summary},
    quantity::time::Hours,
};

pub fn build_plan_table(plan: &Plan) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Start", "End", "Duration", "Mode"]);
    for period in &plan.periods {
        let (mode, color) = if period.is_charging { ("Charging", Color::Green) } else { ("Idle", Color::Reset) };
        table.add_row(vec![
            Cell::new(period.start_time.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(period.start_time.format("%H:%M")),
            Cell::new(period.end_time.format("%H:%M")).add_attribute(Attribute::Dim),
            Cell::new(Hours::from_time_delta(period.duration())).set_alignment(CellAlignment::Right),
            Cell::new(mode).fg(color),
        ]);
    }
    table
}

pub fn build_summary_table(summary: &Summary) -> Table {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Final battery level"),
        Cell::new(summary.final_battery_level)
            .set_alignment(CellAlignment::Right)
            .fg(if summary.is_desired_reached { Color::Green } else { Color::Red }),
    ]);
    table.add_row(vec![
        Cell::new("Charged energy"),
        Cell::new(summary.charged_energy).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Energy cost"),
        Cell::new(summary.cost).set_alignment(CellAlignment::Right),
    ]);
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::dec;

    use super::*;
    use crate::{
        core::{charging_period::ChargingPeriod, interval::Interval},
        quantity::{cost::Cost, energy::KilowattHours},
    };

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 1, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn plan() -> Plan {
        Plan {
            periods: vec![
                ChargingPeriod::charging(Interval::new(at(1, 23), at(2, 3))),
                ChargingPeriod::idle(Interval::new(at(2, 3), at(2, 7))),
            ],
            summary: Summary {
                final_battery_level: KilowattHours::from(dec!(180)),
                charged_energy: KilowattHours::from(dec!(180)),
                cost: Cost::from(dec!(36)),
                is_desired_reached: true,
            },
        }
    }

    #[test]
    fn test_plan_table() {
        let table = build_plan_table(&plan());
        assert_eq!(table.row_count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("Charging"), "{rendered}");
        assert!(rendered.contains("4.00 h"), "{rendered}");
    }

    #[test]
    fn test_summary_table() {
        let rendered = build_summary_table(&plan().summary).to_string();
        assert!(rendered.contains("180.00 kWh"), "{rendered}");
        assert!(rendered.contains("36.00"), "{rendered}");
    }
}
