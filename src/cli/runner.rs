use tracing::info;

use autocrop::CropOutcome;
use autocrop::api::autocrop_in_place;
use autocrop::core::params::CropParams;

use super::args::CliArgs;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = CropParams {
        padding: args.padding,
    };

    // All three terminal states report on stdout; the process exits with a
    // success status either way.
    match autocrop_in_place(&args.input, &params) {
        Ok(CropOutcome::Cropped { width, height }) => {
            info!("successfully cropped {:?}", args.input);
            println!("Cropped image to ({}, {})", width, height);
        }
        Ok(CropOutcome::NoContent) => {
            println!("No content found");
        }
        Err(e) => {
            println!("{}", e);
        }
    }

    Ok(())
}
