//! Output formatting module

use chrono::{DateTime, Utc};
use serde::Serialize;

use skipsize_domain::model::SizeRecord;
use skipsize_domain::service::cards::{HEADING, SUBHEADING};
use skipsize_domain::service::{SelectOutcome, SizeCard};
use skipsize_types::{OutputFormat, Result};

/// Cards of one fetch, with where and when they were loaded
#[derive(Debug, Serialize)]
pub struct CardListing<'a> {
    pub location: String,
    pub loaded_at: DateTime<Utc>,
    pub cards: &'a [SizeCard],
}

pub fn output_cards(output_format: OutputFormat, listing: &CardListing<'_>) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(listing)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\n{}", HEADING);
    println!("{}", "=".repeat(HEADING.len()));
    println!("{}", SUBHEADING);
    println!(
        "{} - loaded {}\n",
        listing.location,
        listing.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    if listing.cards.is_empty() {
        println!("(no sizes available)");
        return Ok(());
    }

    for card in listing.cards {
        let marker = if card.selected {
            "(*)"
        } else if card.disabled {
            " x "
        } else {
            "( )"
        };
        println!(
            "{} #{:<6} {:<16} {:>8}   {}",
            marker, card.id, card.title, card.price, card.hire_period
        );
        for warning in card.warnings() {
            println!("           ! {}", warning);
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct SelectionReport<'a> {
    outcome: &'static str,
    id: u32,
    accepted: bool,
    /// Id the selection callback received, if it ran
    notified: Option<u32>,
    selected: Option<&'a SizeRecord>,
}

fn outcome_parts(outcome: SelectOutcome) -> (&'static str, u32) {
    match outcome {
        SelectOutcome::Selected(id) => ("selected", id),
        SelectOutcome::Unchanged(id) => ("unchanged", id),
        SelectOutcome::RejectedHeavyWaste(id) => ("rejected_heavy_waste", id),
        SelectOutcome::UnknownSize(id) => ("unknown_size", id),
    }
}

pub fn output_selection(
    output_format: OutputFormat,
    outcome: SelectOutcome,
    selected: Option<&SizeRecord>,
    notified: Option<u32>,
) -> Result<()> {
    let (label, id) = outcome_parts(outcome);

    if output_format == OutputFormat::Json {
        let report = SelectionReport {
            outcome: label,
            id,
            accepted: outcome.is_accepted(),
            notified,
            selected,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome {
        SelectOutcome::Selected(_) | SelectOutcome::Unchanged(_) => {
            if let Some(record) = selected {
                let card = SizeCard::from_record(record, Some(record.id), false);
                println!("\nSelected size");
                println!("=============");
                println!("Id:              {}", record.id);
                println!("Size:            {}", card.title);
                println!("Price (ex VAT):  {}", card.price);
                println!("Hire period:     {}", card.hire_period);
                if let Some(cost) = record.transport_cost {
                    println!("Transport cost:  £{}", cost);
                }
                if let Some(cost) = record.per_tonne_cost {
                    println!("Per tonne cost:  £{}", cost);
                }
                for warning in card.warnings() {
                    println!("Warning:         {}", warning);
                }
            }
        }
        SelectOutcome::RejectedHeavyWaste(_) => {
            println!("Size {} is not suitable for heavy waste; selection unchanged", id);
        }
        SelectOutcome::UnknownSize(_) => {
            println!("Size {} is not offered at this location", id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_listing_json_carries_load_time() {
        let cards = vec![SizeCard {
            id: 7,
            title: "8 Yard Skip".to_string(),
            price: "£375".to_string(),
            hire_period: "14 day hire period".to_string(),
            selected: false,
            disabled: false,
            road_warning: false,
            heavy_waste_warning: false,
        }];
        let listing = CardListing {
            location: "Lowestoft (NR32)".to_string(),
            loaded_at: Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap(),
            cards: &cards,
        };

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["loaded_at"], "2026-10-16T09:30:00Z");
        assert_eq!(json["location"], "Lowestoft (NR32)");
        assert_eq!(json["cards"][0]["id"], 7);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(outcome_parts(SelectOutcome::Selected(3)), ("selected", 3));
        assert_eq!(
            outcome_parts(SelectOutcome::RejectedHeavyWaste(4)),
            ("rejected_heavy_waste", 4)
        );
    }
}
