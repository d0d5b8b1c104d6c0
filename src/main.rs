use mergeimg::{
    merge::split_list,
    timer::Timer,
    CompositionRequest,
    MergeStatus,
    Orientation,
};

use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Images to stack, in order
    #[arg(required_unless_present = "list", conflicts_with = "list")]
    inputs: Vec<PathBuf>,
    /// `;` separated list of images, split as given
    #[arg(long)]
    list: Option<String>,
    /// Output image, its extension picks the format
    #[arg(short, long)]
    output: PathBuf,
    /// Stack left to right instead of top to bottom
    #[arg(short, long)]
    landscape: bool,
}

pub fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::parse();
    let timer = Timer::new();

    let orientation = if args.landscape { Orientation::Landscape } else { Orientation::Portrait };
    let files = match &args.list {
        Some(list) => split_list(list),
        None => args.inputs,
    };
    let request = CompositionRequest::new(files, orientation, args.output);

    let res = request.run();
    println!("{}", MergeStatus::from(&res));
    log::debug!("Total: {:?}ms", timer.total());
    res.map_err(|e| e.to_string())
}
