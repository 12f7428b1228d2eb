//! Running the front end against config files on disk.

use std::io::{self, Write};
use std::path::PathBuf;

use grunty_cli::{CliArgs, CliError, OutputFormat, run_with};

fn pantry(stock: &[(&str, u32)]) -> String {
    const FOODS: [&str; 16] = [
        "golden_egg",
        "grunt_mints",
        "twilight_onion",
        "snaky_cactus",
        "oh_no_melon",
        "cordyceps",
        "white_cherry",
        "root_vegetable",
        "la_pumpkin",
        "mushroom",
        "mandragora",
        "piney_apple",
        "immature_egg",
        "bear_cat_egg",
        "invisible_egg",
        "bloody_egg",
    ];

    let mut yaml = String::from("food:\n");
    for name in FOODS {
        let count = stock
            .iter()
            .find(|(food, _)| *food == name)
            .map_or(0, |(_, count)| *count);
        yaml.push_str(&format!("  {name}: {count}\n"));
    }
    yaml
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn args(path: PathBuf) -> CliArgs {
    CliArgs {
        config_path: path,
        ..CliArgs::default()
    }
}

fn run(args: &CliArgs) -> String {
    let (out, _) = run_with(args, Vec::new()).expect("run succeeds");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn golden_eggs_print_one_noble_plan() {
    let file = write_config(&format!(
        "server: Theta\ngoal: Noble\n{}",
        pantry(&[("golden_egg", 20)])
    ));

    let out = run(&args(file.path().to_path_buf()));
    let lines: Vec<_> = out.lines().collect();

    assert_eq!(lines.len(), 17);
    assert_eq!(lines[0], "noble");
    assert_eq!(lines[1], "golden_egg\t15");
    assert!(lines[2..].iter().all(|line| line.ends_with("\t0")));
}

#[test]
fn golden_eggs_never_make_iron() {
    let file = write_config(&format!(
        "server: theta\ngoal: iron\n{}",
        pantry(&[("golden_egg", 20)])
    ));

    let (out, stats) = run_with(&args(file.path().to_path_buf()), Vec::new()).expect("run");
    assert!(out.is_empty());
    assert_eq!(stats.matches, 0);
    assert_eq!(stats.terminals, 1);
}

#[test]
fn multiset_flag_collapses_orderings() {
    let file = write_config(&format!(
        "server: theta\ngoal: noble\n{}",
        pantry(&[("golden_egg", 14), ("immature_egg", 2)])
    ));
    let mut args = args(file.path().to_path_buf());
    args.format = OutputFormat::Json;

    // 15 placements of one immature egg plus C(15, 2) placements of two.
    assert_eq!(run(&args).lines().count(), 120);

    args.multiset = true;
    let out = run(&args);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(r#"{"label":"noble","food":{"golden_egg":14,"#));
    assert!(lines[1].starts_with(r#"{"label":"noble","food":{"golden_egg":13,"#));
}

#[test]
fn multiset_in_config_is_honored() {
    let file = write_config(&format!(
        "server: theta\ngoal: noble\nbranching: multiset\n{}",
        pantry(&[("golden_egg", 14), ("immature_egg", 2)])
    ));

    let (_, stats) = run_with(&args(file.path().to_path_buf()), Vec::new()).expect("run");
    assert_eq!(stats.matches, 2);
}

#[test]
fn invalid_server_exits_with_one() {
    let file = write_config(&format!("server: Delta\ngoal: iron\n{}", pantry(&[])));

    let err = run_with(&args(file.path().to_path_buf()), Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
    assert_eq!(err.to_string(), "invalid server Delta");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn missing_food_exits_with_one() {
    let file = write_config("server: theta\ngoal: iron\nfood:\n  golden_egg: 3\n");

    let err = run_with(&args(file.path().to_path_buf()), Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "missing food count: grunt_mints");
    assert_eq!(err.exit_code(), 1);
}

#[derive(Debug)]
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn closed_output_exits_with_two() {
    let file = write_config(&format!(
        "server: theta\ngoal: noble\n{}",
        pantry(&[("golden_egg", 14), ("immature_egg", 2)])
    ));

    let err = run_with(&args(file.path().to_path_buf()), ClosedPipe).unwrap_err();
    assert!(matches!(err, CliError::Output(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    assert_eq!(err.exit_code(), 2);
}
