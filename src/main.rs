mod cli;

use clap::Parser;
use hexagon_art::{self as hex, mesh::Canvas};
use rand::{rngs::StdRng, SeedableRng};
use std::{io, process};

fn main() {
    env_logger::init();
    let args = cli::Args::parse();

    // Ask for whatever is missing from the command line
    let stdin = io::stdin();
    let mut shell = hex::shell::Shell::new(stdin.lock(), io::stdout(), hex::translate::GlossaryTranslator);
    let settings = match shell.collect(&args.preset()) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("error: {}", error);
            process::exit(1);
        }
    };

    // Lay out the grid
    let spec = match hex::layout::GridSpec::new(settings.n, args.canvas_size as f64) {
        Ok(spec) => spec,
        Err(error) => {
            eprintln!("error: {}", error);
            process::exit(1);
        }
    };
    let layout = hex::layout::Layout::new(&spec);

    if args.print_centers {
        let centers: Vec<(f64, f64)> = layout.get_centers().iter().map(|center| (center.get_x(), center.get_y())).collect();
        println!("{:?}", centers);
    }

    // Color every hexagon before anything is drawn
    let scene = match args.seed {
        Some(seed) => hex::scene::compose(&layout, &settings.palette, settings.mode, &mut StdRng::seed_from_u64(seed)),
        None => hex::scene::compose(&layout, &settings.palette, settings.mode, &mut rand::thread_rng()),
    };

    if args.no_window {
        for instruction in &scene {
            println!("{} {} {} {:.3}", instruction.center.get_x(), instruction.center.get_y(), instruction.fill, instruction.side);
        }
        return;
    }

    // Draw everything, the window only receives the finished mesh
    let mut mesh = hex::mesh::Mesh::new(hex::mesh::HexagonStyle::default());
    mesh.draw_scene(&scene);

    // Run the application
    if let Err(error) = pollster::block_on(hex::application::run(mesh, hex::messages::WELCOME_MESSAGE, args.canvas_size)) {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}
