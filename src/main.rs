use std::fmt::Display;

use clap::Parser;
use generic_list::LinkedList;

/// Builds a list from the command line and prints it in its display, length and slice forms.
/// With no arguments this walks through the default demonstration: start at 1, append 2 and 3,
/// then prepend 0.
#[derive(Parser, Debug)]
#[command(about = "Fun with generic linked lists", allow_negative_numbers = true)]
struct CmdOptions {
    #[arg(long, default_value = "1")]
    start: i64,
    #[arg(long, num_args = 1.., value_delimiter = ',', default_values_t = vec![2, 3])]
    append: Vec<i64>,
    #[arg(long, default_value = "0")]
    prepend: i64,
}

fn main() {
    // Only warnings by default so stdout stays exactly the list output. Set RUST_LOG=debug to
    // watch each step.
    if let Err(_) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "warn");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    log::debug!("{:?}", options);

    let list = build_list(&options);
    println!("List contents: {}", list);
    println!("List length: {}", list.len());
    println!("Slice form: {}", format_slice(&list.to_vec()));
}

fn build_list(options: &CmdOptions) -> LinkedList<i64> {
    let mut list = LinkedList::new(options.start);
    log::debug!("start: {}", list);
    for value in &options.append {
        list.append(*value);
        log::debug!("append {}: {}", value, list);
    }
    let list = LinkedList::prepend(list, options.prepend);
    log::debug!("prepend {}: {}", options.prepend, list);
    list
}

/// Renders values space separated inside brackets, e.g. `[0 1 2 3]`.
fn format_slice<T: Display>(values: &[T]) -> String {
    let joined: Vec<String> = values.iter().map(|value| value.to_string()).collect();
    format!("[{}]", joined.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_build_demo_list() {
        let options = CmdOptions::try_parse_from(["generic_list"]).unwrap();
        let list = build_list(&options);
        assert_eq!(list.to_string(), "[0 -> 1 -> 2 -> 3]");
        assert_eq!(list.len(), 4);
        assert_eq!(format_slice(&list.to_vec()), "[0 1 2 3]");
    }

    #[test]
    fn custom_options() {
        let options = CmdOptions::try_parse_from([
            "generic_list",
            "--start",
            "-5",
            "--append",
            "7,8",
            "--append",
            "9",
            "--prepend",
            "4",
        ])
        .unwrap();
        let list = build_list(&options);
        assert_eq!(list.to_vec(), vec![4, -5, 7, 8, 9]);
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert!(CmdOptions::try_parse_from(["generic_list", "--start", "one"]).is_err());
    }

    #[test]
    fn slice_formatting() {
        assert_eq!(format_slice(&[42]), "[42]");
        assert_eq!(format_slice::<u8>(&[]), "[]");
        assert_eq!(format_slice(&["a", "b"]), "[a b]");
    }
}
