use rangeunion::{ClosedRange, InvalidRangeError, RangeSet};

fn main() -> Result<(), InvalidRangeError> {
    let mut set: RangeSet<ClosedRange<i32>> = RangeSet::discrete();

    // Single points fuse as they arrive.
    for i in 0..10 {
        set.insert_point(i)?;
        println!("after {}: {:?}", i, set);
    }
    print!("{}", set);

    set.insert_bounds(20, 25)?;
    set.insert_bounds(12, 15)?;
    println!("{:?}", set);

    // Fills the gap between the last two ranges.
    set.insert_bounds(16, 19)?;
    // The one-item gap at 10 and 11.
    set.insert_bounds(10, 11)?;
    print!("{}", set);

    if let Err(err) = set.insert_bounds(30, 29) {
        println!("refused [30, 29]: {}", err);
    }

    let mut continuous: RangeSet<ClosedRange<i32>> = RangeSet::continuous();
    continuous.insert_bounds(1, 3)?;
    continuous.insert_bounds(4, 6)?;
    println!("{:?} stays as {} ranges", continuous, continuous.len());

    Ok(())
}
