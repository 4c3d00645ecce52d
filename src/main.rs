use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fuzzlab::generics::{bunch::Bunch, cmp, collect, guidelines, processor, stack::Stack};
use fuzzlab::subjects::{compare, rle};
use fuzzlab::utils::logger;
use fuzzlab::SharedMap;

#[derive(Parser, Debug)]
#[command(name = "fuzzlab", about = "Demo runner for the generics & fuzzing session")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through the generic-function demos
    Generics,
    /// Hammer the shared map from many tasks and count lost inserts
    MapStress {
        #[arg(long, default_value_t = 8)]
        tasks: usize,
        #[arg(long, default_value_t = 1000)]
        keys: usize,
    },
    /// Encode the given strings and decode them back
    Roundtrip { values: Vec<String> },
    /// Run a body through the comparison handler
    Compare { a: String, b: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Generics => run_generics().await,
        Command::MapStress { tasks, keys } => run_map_stress(tasks, keys).await,
        Command::Roundtrip { values } => run_roundtrip(&values),
        Command::Compare { a, b } => run_compare(&a, &b),
    }
}

async fn run_generics() -> anyhow::Result<()> {
    println!("min_i64(1, 2)      = {}", cmp::min_i64(1, 2));
    println!("min_f64(1.1, 2.2)  = {}", cmp::min_f64(1.1, 2.2));
    println!("min(2, 5)          = {}", cmp::min(2, 5));
    println!("min(2.2, 5.5)      = {}", cmp::min(2.2, 5.5));
    println!("min(\"a\", \"b\")      = {}", cmp::min("a", "b"));
    println!("equal(1, 1)        = {}", cmp::equal(1, 1));

    let mut map = std::collections::HashMap::new();
    map.insert("key1".to_string(), "value1".to_string());
    map.insert("key2".to_string(), "value2".to_string());
    let mut keys = collect::map_keys(&map);
    keys.sort();
    println!("map_keys           = {:?}", keys);

    let bunch = Bunch(vec![1, 2, 3]);
    println!("bunch              = {}", bunch);
    println!("bunch.first()      = {:?}", bunch.first());

    let mut st = Stack::new();
    st.push(5);
    println!("stack.pop()        = {:?}", st.pop());

    let mut reader: &[u8] = b"buffer string";
    let bytes = guidelines::read_all(&mut reader)?;
    println!("read_all           = {}", String::from_utf8_lossy(&bytes));

    let (tx, mut rx) = tokio::sync::mpsc::channel(1);
    processor::forward_to_channel("input".to_string(), tx, &processor::EchoProcessor).await?;
    let out = rx.recv().await.context("processor channel closed")?;
    println!("processor          = {}", out);

    Ok(())
}

async fn run_map_stress(tasks: usize, keys: usize) -> anyhow::Result<()> {
    let map = Arc::new(SharedMap::new());
    let mut handles = Vec::with_capacity(tasks);

    for task in 0..tasks {
        let map = Arc::clone(&map);
        handles.push(tokio::task::spawn_blocking(move || {
            let mut claimed = 0usize;
            for k in 0..keys {
                if map.set_if_absent(&format!("key{}", k), &format!("task{}", task)) {
                    claimed += 1;
                }
            }
            claimed
        }));
    }

    let mut total_claims = 0usize;
    for handle in handles {
        total_claims += handle.await?;
    }

    tracing::info!(tasks, keys, total_claims, "stress run finished");
    println!("{} keys, {} claims reported", keys, total_claims);
    if total_claims > keys {
        println!(
            "{} claims are duplicates: set_if_absent raced, as advertised",
            total_claims - keys
        );
    }
    Ok(())
}

fn run_roundtrip(values: &[String]) -> anyhow::Result<()> {
    let encoded = rle::encode_strings(values);
    tracing::debug!("encoded {} strings into {} bytes", values.len(), encoded.len());
    let decoded = rle::decode_strings(&encoded).context("decoding our own encoding failed")?;
    println!("encoded bytes: {:?}", encoded);
    println!("decoded back : {:?}", decoded);
    Ok(())
}

fn run_compare(a: &str, b: &str) -> anyhow::Result<()> {
    let body = compare::Compare::new(a, b).to_body()?;
    let reply = compare::handle(&body);
    println!("{} {}", reply.status, reply.body);
    Ok(())
}
