//! Feature showcase walkthrough.

use std::io::Write;
use std::path::Path;
use std::thread;

use anyhow::Context;
use chrono::{DateTime, Local};
use syntaxlab_core::InstanceCounter;
use syntaxlab_showcase::{
    Greeting, Person, Point, Shape, anonymous_greeting, describe, first_element,
};

const WORKER_THREAD: &str = "showcase-worker";

/// Run every showcase in order.
///
/// Regular output goes to `out`. A failed save is reported on `err` and
/// the walkthrough carries on; any other failure is returned.
pub fn run(
    counter: &InstanceCounter,
    output_path: &Path,
    now: DateTime<Local>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut person = Person::new(counter, "Alice", 25);
    person.add_hobby("Reading");
    person.add_hobby("Swimming");
    person.add_hobbies(["Hiking", "Photography"]);

    writeln!(out, "{}", person.hobby_printer())?;
    writeln!(out, "Instance count: {}", counter.count())?;
    writeln!(out, "{}", anonymous_greeting().greet())?;

    let mut processed = Vec::new();
    person.for_each_hobby(|hobby| processed.push(format!("Processing hobby: {hobby}")));
    for line in processed {
        writeln!(out, "{line}")?;
    }

    writeln!(out, "Long hobbies: [{}]", person.long_hobbies().join(", "))?;
    writeln!(
        out,
        "Point distance: {}",
        Point::new(3, 4).distance_from_origin()
    )?;
    writeln!(out, "{}", person.to_json()?)?;
    writeln!(out, "{}", describe(&"Hello"))?;
    writeln!(out, "{}", describe(&42_i32))?;

    for shape in [Shape::circle(5.0), Shape::rectangle(3.0, 4.0)] {
        writeln!(out, "{} area: {}", shape.name(), shape.area())?;
    }

    let worker = thread::Builder::new()
        .name(WORKER_THREAD.to_string())
        .spawn(|| {
            let current = thread::current();
            format!("Running in thread: {}", current.name().unwrap_or("unnamed"))
        })
        .context("failed to spawn showcase thread")?;
    let line = worker
        .join()
        .map_err(|_| anyhow::anyhow!("showcase thread panicked"))?;
    writeln!(out, "{line}")?;

    writeln!(out, "Current time: {}", now.format("%Y-%m-%dT%H:%M:%S"))?;

    if let Err(e) = person.save_to_file(output_path) {
        writeln!(err, "Failed to save: {e}")?;
    }

    let numbers = vec![1, 2, 3];
    match first_element(Some(numbers.as_slice())) {
        Some(n) => writeln!(out, "First number: {n}")?,
        None => writeln!(out, "First number: none")?,
    }

    write_iterations(&[1, 2, 3, 4, 5], out)?;

    writeln!(out, "Status: {}", person.status())?;
    writeln!(out, "Age group: {}", person.age_group())?;

    tracing::info!(instances = counter.count(), "showcase finished");
    Ok(())
}

/// The same array walked four ways.
fn write_iterations(array: &[i32], out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Array length: {}", array.len())?;

    for num in array {
        writeln!(out, "Number: {num}")?;
    }

    for (i, num) in array.iter().enumerate() {
        writeln!(out, "Element at {i}: {num}")?;
    }

    let mut i = 0;
    while i < array.len() {
        writeln!(out, "While loop: {}", array[i])?;
        i += 1;
    }

    // Body runs before the bound check.
    let mut i = 0;
    loop {
        if let Some(num) = array.get(i) {
            writeln!(out, "Do-while loop: {num}")?;
        }
        i += 1;
        if i >= array.len() {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterations_cover_every_element() {
        let mut out = Vec::new();
        write_iterations(&[7, 8], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Array length: 2\n\
             Number: 7\nNumber: 8\n\
             Element at 0: 7\nElement at 1: 8\n\
             While loop: 7\nWhile loop: 8\n\
             Do-while loop: 7\nDo-while loop: 8\n"
        );
    }

    #[test]
    fn do_while_on_empty_array_prints_nothing() {
        let mut out = Vec::new();
        write_iterations(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Array length: 0\n");
    }
}
