use std::fs;
use std::io;
use std::io::Write;

use clap::{App, Arg};
use orchestration_nlu::{normalize_str, FromRecognizerResult, OrchestrationSchema};

fn main() {
    env_logger::Builder::from_default_env()
        .default_format_timestamp_nanos(true)
        .init();

    let matches = App::new("orchestration-normalize")
        .about("Normalizes orchestration analysis responses into canonical recognizer results")
        .arg(
            Arg::with_name("RESPONSE_FILE")
                .required(true)
                .takes_value(true)
                .index(1)
                .help("path to a json analysis response returned by the orchestration backend"),
        )
        .arg(
            Arg::with_name("typed")
                .short("t")
                .long("typed")
                .help("also print the typed top intent of each result"),
        )
        .get_matches();
    let response_path = matches.value_of("RESPONSE_FILE").unwrap();
    let typed = matches.is_present("typed");

    let raw_json = fs::read_to_string(response_path).unwrap();

    loop {
        print!("utterance> ");
        io::stdout().flush().unwrap();
        let mut utterance = String::new();
        if io::stdin().read_line(&mut utterance).unwrap() == 0 {
            break;
        }
        match normalize_str(&raw_json, utterance.trim()) {
            Ok(result) => {
                println!("{}", serde_json::to_string_pretty(&result).unwrap());
                if typed {
                    let schema = OrchestrationSchema::from_recognizer_result(&result).unwrap();
                    let (intent, score) = schema.top_intent();
                    println!("top intent: {} ({})", intent, score);
                }
            }
            Err(e) => println!("Sorry, I didn't get that ({})", e),
        }
    }
}
