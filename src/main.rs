//! 词汇翻译 Web 服务主程序入口

use wordbook::env::{core::LogLevel, EnvVar};
use wordbook::web::{WebConfig, WebServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = LogLevel::get().unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let mut config = WebConfig::from_env()?;

    // 命令行参数优先于环境变量
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" | "-b" => {
                if i + 1 < args.len() {
                    config.bind_addr = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --bind requires an address");
                    std::process::exit(1);
                }
            }
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    config.port = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("Error: Invalid port number");
                        std::process::exit(1);
                    });
                    i += 2;
                } else {
                    eprintln!("Error: --port requires a port number");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Error: Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
    }

    config.validate()?;

    let server = WebServer::new(config);
    server.start().await?;

    Ok(())
}

fn print_help() {
    println!("Wordbook Web Server");
    println!();
    println!("USAGE:");
    println!("    wordbook [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -b, --bind <ADDRESS>     Bind address [default: 127.0.0.1]");
    println!("    -p, --port <PORT>        Port number [default: 3000]");
    println!("    -h, --help               Print help information");
    println!();
    println!("ENVIRONMENT:");
    println!("    MONGODB_URL              MongoDB connection string");
    println!("    OPENAI_API_KEY           Credential for the translation provider");
    println!("    WORDBOOK_TRANSLATE_MODE  Translate endpoint behavior: single, options");
    println!();
    println!("EXAMPLES:");
    println!("    wordbook");
    println!("    wordbook --bind 0.0.0.0 --port 8080");
}
