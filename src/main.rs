mod extract;
mod http_client;

use clap::Parser;
use http_client::HttpClient;
use std::time::Instant;

const DEFAULT_URL: &str = "http://localhost:8923/test.html";

#[derive(Parser, Debug)]
#[command(about = "Fetch a page and print its <head> section")]
struct Args {
    /// Print the full response body
    #[arg(short, long)]
    full: bool,

    /// URL to fetch
    #[arg(default_value = DEFAULT_URL)]
    url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    let client = HttpClient::new().expect("Failed to create HTTP client");

    let start = Instant::now();
    match client.fetch(&args.url).await {
        Ok(body) => {
            if args.full {
                println!("{}", body);
            } else {
                match extract::head_section(&body) {
                    Some(head) => println!("{}", head),
                    None => println!("<head> section not found."),
                }
            }
            println!("{}", elapsed_line(start.elapsed().as_secs_f64()));
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn elapsed_line(seconds: f64) -> String {
    format!("Time taken: {:.4} seconds", seconds)
}
