use county_roster::{RosterFacts, RosterRun, RouteGrouping, TriplistRow, cumulative_miles};

/// Terminal styles keyed by what they mark in the report.
mod style {
    #[derive(Clone, Copy)]
    pub enum Role {
        Heading,
        Rule,
        Place,
        Quantity,
        Flag,
        Muted,
    }

    impl Role {
        fn sgr(self) -> &'static str {
            match self {
                Role::Heading => "1;36",
                Role::Rule => "90",
                Role::Place => "1;32",
                Role::Quantity => "33",
                Role::Flag => "34",
                Role::Muted => "2",
            }
        }
    }

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, role: Role, s: impl AsRef<str>) -> String {
            if self.enabled { format!("\x1b[{}m{}\x1b[0m", role.sgr(), s.as_ref()) } else { s.as_ref().to_string() }
        }

        pub fn rule(&self, title: &str) -> String {
            self.paint(Role::Rule, format!("━━━ {} ━━━", title))
        }
    }
}

use style::{Palette, Role};

pub fn print_roster(route: &str, run: &RosterRun, facts: &RosterFacts, color: bool, verbose: bool) {
    let palette = Palette::new(color);
    println!("\n{}", palette.paint(Role::Heading, format!("Route {}", route)));

    println!("\n{}", palette.rule("Counties"));
    print_rows(&run.roster, &palette);

    println!("\n{}", palette.rule("Facts"));
    print_facts(facts, &palette);

    if verbose {
        println!("\n{}", palette.rule("Stages"));
        print_stages(run, &palette);
    }
    println!();
}

fn print_rows(roster: &[TriplistRow], palette: &Palette) {
    let cumulative = cumulative_miles(roster);
    for (row, running) in roster.iter().zip(cumulative) {
        let marks: Vec<&str> = [(row.is_vital(), "vital"), (row.is_pres(), "pres"), (row.remove, "remove")]
            .into_iter()
            .filter_map(|(set, mark)| set.then_some(mark))
            .collect();

        println!(
            "  {} {} {} {} {}",
            palette.paint(Role::Muted, format!("{:>3}.", row.row)),
            palette.paint(Role::Place, format!("{}, {}", row.county, row.state)),
            palette.paint(Role::Quantity, format!("{:>8.2} mi", row.miles)),
            palette.paint(Role::Muted, format!("(cum {:.2})", running)),
            palette.paint(Role::Flag, marks.join(" ")),
        );
        if !row.notes.is_empty() {
            println!("       {}", palette.paint(Role::Muted, &row.notes));
        }
    }
}

fn print_facts(facts: &RosterFacts, palette: &Palette) {
    println!(
        "  {} segments, {} total, {} per segment",
        palette.paint(Role::Quantity, facts.segments.to_string()),
        palette.paint(Role::Quantity, format!("{:.2} mi", facts.total_miles)),
        palette.paint(Role::Muted, format!("{:.2} mi", facts.avg_miles_per_segment)),
    );
    println!(
        "  vital counties: {}  presidential counties: {}",
        palette.paint(Role::Flag, facts.vital_counties.to_string()),
        palette.paint(Role::Flag, facts.pres_counties.to_string()),
    );
    for state in &facts.states {
        println!(
            "    {} {} {}",
            palette.paint(Role::Place, format!("{:<4}", state.state)),
            palette.paint(Role::Quantity, format!("{:>9.2} mi", state.miles)),
            palette.paint(Role::Muted, format!("{} counties", state.county_count)),
        );
    }
}

fn print_stages(run: &RosterRun, palette: &Palette) {
    for stage in &run.stages {
        let state = if stage.enabled { "on" } else { "off" };
        println!(
            "  {:<8} {:<3}  rows {}  miles {}  {}",
            stage.stage.as_str(),
            state,
            palette.paint(Role::Quantity, format!("{} -> {}", stage.rows_in, stage.rows_out)),
            palette.paint(Role::Quantity, format!("{:.2}", stage.miles)),
            palette.paint(Role::Muted, format!("{:?}", stage.duration)),
        );
    }
    println!("  total {}", palette.paint(Role::Muted, format!("{:?}", run.total)));
}

pub fn print_groups(grouping: &RouteGrouping, color: bool) {
    let palette = Palette::new(color);

    for bucket in grouping.selectable() {
        println!(
            "\n{} {}",
            palette.paint(Role::Heading, bucket.label),
            palette.paint(Role::Muted, format!("[{}, {}]", bucket.id, bucket.class)),
        );
        println!("  {}", bucket.routes.join(", "));
    }

    if !grouping.unassigned.is_empty() {
        println!("\n{}", palette.rule("Unassigned"));
        println!("  {}", palette.paint(Role::Muted, grouping.unassigned.join(", ")));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_plain_when_disabled() {
        let palette = Palette::new(false);
        assert_eq!(palette.paint(Role::Place, "Shelby, TN"), "Shelby, TN");
        assert_eq!(palette.rule("Facts"), "━━━ Facts ━━━");
    }

    #[test]
    fn palette_wraps_roles_in_sgr_codes() {
        let palette = Palette::new(true);
        assert_eq!(palette.paint(Role::Quantity, "12.50"), "\x1b[33m12.50\x1b[0m");
        assert_eq!(palette.paint(Role::Heading, "I.40"), "\x1b[1;36mI.40\x1b[0m");
    }
}
