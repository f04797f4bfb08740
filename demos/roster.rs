use chrono::{Duration, NaiveDate};
use rangeunion::{ClosedRange, ClosedRangeFactory, InvalidRangeError, Mode, RangeSet, Steps};

fn tomorrow(day: &NaiveDate) -> NaiveDate {
    day.succ_opt().unwrap_or(*day)
}

fn yesterday(day: &NaiveDate) -> NaiveDate {
    day.pred_opt().unwrap_or(*day)
}

fn new_roster() -> RangeSet<ClosedRange<NaiveDate>> {
    RangeSet::with_factory(
        ClosedRangeFactory,
        Mode::Discrete(Steps::new(tomorrow, yesterday)),
    )
}

fn main() -> Result<(), InvalidRangeError> {
    let people = ["Alice", "Bob", "Carol"];
    let mut rosters: Vec<_> = people.iter().map(|_| new_roster()).collect();

    // Week-long shifts, handed round in turn.
    let start_of_roster = NaiveDate::from_ymd_opt(2019, 1, 7).ok_or(InvalidRangeError)?;
    let mut week_start = start_of_roster;
    for _ in 0..3 {
        for roster in rosters.iter_mut() {
            let week_end = week_start + Duration::days(6);
            roster.insert_bounds(week_start, week_end)?;
            week_start = week_end + Duration::days(1);
        }
    }

    // Bob is covering Alice's second shift (the fourth shift overall).
    let fourth_shift_start = start_of_roster + Duration::weeks(3);
    rosters[1].insert_bounds(fourth_shift_start, fourth_shift_start + Duration::days(6))?;

    for (person, roster) in people.iter().zip(&rosters) {
        println!("{}:", person);
        print!("{}", roster);
    }

    Ok(())
}

// Output:
// Alice:
// Min : 2019-01-07 -  Max: 2019-01-13
// Min : 2019-01-28 -  Max: 2019-02-03
// Min : 2019-02-18 -  Max: 2019-02-24
// Bob:
// Min : 2019-01-14 -  Max: 2019-01-20
// Min : 2019-01-28 -  Max: 2019-02-10
// Min : 2019-02-25 -  Max: 2019-03-03
// Carol:
// Min : 2019-01-21 -  Max: 2019-01-27
// Min : 2019-02-11 -  Max: 2019-02-17
// Min : 2019-03-04 -  Max: 2019-03-10
