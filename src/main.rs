// zxmem - build a raw target memory image
// Selects a memory model, applies paging, loads binaries at logical addresses
// and writes the physical buffer out, pages in ascending order.

use std::env;
use std::fs;
use std::process;

use log::{debug, info};
use zxmem::{MemoryConfig, MemoryError, MemoryManager, SlotMapping};

struct Load {
    addr: u16,
    path: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let mut config = MemoryConfig::default();
    let mut model_override: Option<String> = None;
    let mut sys_vars = false;
    let mut pages: Vec<SlotMapping> = Vec::new();
    let mut loads: Vec<Load> = Vec::new();
    let mut output_file = String::new();
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--config" => {
                let path = required_arg(&args, i, 1);
                config = MemoryConfig::from_file(&args[path]).unwrap_or_else(|e| fail(&e));
                i += 2;
            }
            "-m" | "--model" => {
                let name = required_arg(&args, i, 1);
                model_override = Some(args[name].clone());
                i += 2;
            }
            "--sysvars" => {
                sys_vars = true;
                i += 1;
            }
            "--page" => {
                let last = required_arg(&args, i, 2);
                pages.push(SlotMapping {
                    slot: parse_number(&args[last - 1]) as usize,
                    page: parse_number(&args[last]) as usize,
                });
                i += 3;
            }
            "--load" => {
                let last = required_arg(&args, i, 2);
                let addr = parse_number(&args[last - 1]);
                if addr > 0xFFFF {
                    eprintln!("Error: load address {} is outside 64K", args[last - 1]);
                    process::exit(1);
                }
                loads.push(Load {
                    addr: addr as u16,
                    path: args[last].clone(),
                });
                i += 3;
            }
            "-o" | "--output" => {
                let name = required_arg(&args, i, 1);
                output_file = args[name].clone();
                i += 2;
            }
            "-v" | "--verbose" => {
                verbose = true;
                i += 1;
            }
            "-h" | "--help" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            arg => {
                eprintln!("Error: Unknown option '{}'", arg);
                print_usage(&args[0]);
                process::exit(1);
            }
        }
    }

    if output_file.is_empty() {
        eprintln!("Error: No output file specified");
        print_usage(&args[0]);
        process::exit(1);
    }

    if let Some(name) = model_override {
        config.model = name;
    }
    config.zx_sys_vars |= sys_vars;
    config.slots.extend(pages);

    if let Err(e) = run(&config, &loads, &output_file, verbose) {
        fail(&e);
    }
}

fn run(
    config: &MemoryConfig,
    loads: &[Load],
    output_file: &str,
    verbose: bool,
) -> Result<(), MemoryError> {
    let mut memory = MemoryManager::from_config(config)?;

    for load in loads {
        let data = fs::read(&load.path)
            .map_err(|e| MemoryError::IOError(format!("{}: {}", load.path, e)))?;
        debug!(
            "Loading {} ({} bytes) at {:#06x}",
            load.path,
            data.len(),
            load.addr
        );
        memory.copy_to_memory(load.addr, &data);
    }

    if verbose {
        println!("{}", memory.mem_model());
    }

    fs::write(output_file, memory.memory())
        .map_err(|e| MemoryError::IOError(format!("{}: {}", output_file, e)))?;
    info!(
        "Wrote {} bytes of {} memory to {}",
        memory.memory().len(),
        memory.mem_model_name(),
        output_file
    );
    Ok(())
}

/// Index of the last of `count` values following the option at `i`
fn required_arg(args: &[String], i: usize, count: usize) -> usize {
    if i + count >= args.len() {
        eprintln!("Error: {} requires {} argument(s)", args[i], count);
        process::exit(1);
    }
    i + count
}

/// Accepts decimal, `0x` hex and `$` hex
fn parse_number(text: &str) -> u32 {
    let parsed = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix('$')) {
        u32::from_str_radix(hex, 16)
    } else {
        text.parse::<u32>()
    };
    parsed.unwrap_or_else(|_| {
        eprintln!("Error: Invalid number '{}'", text);
        process::exit(1);
    })
}

fn fail(err: &MemoryError) -> ! {
    eprintln!("Error: {}", err);
    process::exit(1);
}

fn print_usage(program_name: &str) {
    println!("zxmem - raw target memory image builder");
    println!();
    println!("Usage: {} [options] -o <output.bin>", program_name);
    println!();
    println!("Options:");
    println!("  -c, --config <file>    TOML run configuration");
    println!("  -m, --model <name>     PLAIN, ZXSPECTRUM128, ZXSPECTRUM256,");
    println!("                         ZXSPECTRUM512 or ZXSPECTRUM1024");
    println!("      --sysvars          Seed the system-variable area");
    println!("      --page <slot> <page>");
    println!("                         Map a page into a slot (repeatable)");
    println!("      --load <addr> <file>");
    println!("                         Copy a binary to a logical address (repeatable)");
    println!("  -o, --output <file>    Raw image to write");
    println!("  -v, --verbose          Print the slot map");
    println!("  -h, --help             Show this help message");
    println!();
    println!("Examples:");
    println!("  {} -m ZXSPECTRUM128 --sysvars --load 0x8000 code.bin -o image.bin", program_name);
    println!("  {} -c build.toml --page 3 1 --load 0xC000 bank1.bin -o image.bin", program_name);
}
