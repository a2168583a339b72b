use crate::cli::ExtractArgs;
use crate::output::{print_info, print_success, truncate_name};
use trackrip_core::{
    CodecType, CoreResult, ExtractionRequest, Extractor, check_dependency, probe_streams,
};

/// Execute the extract command: probe the container, resolve the selected
/// descriptor, and remux that one stream into a standalone file.
pub fn run_extract(args: ExtractArgs) -> CoreResult<()> {
    check_dependency("ffprobe")?;
    check_dependency("ffmpeg")?;

    // The request is built from a fresh probe, as a picker UI would build it
    // from its most recent stream table.
    let streams = probe_streams(&args.input_path)?;
    let codec_type = match streams.iter().find(|s| s.index == args.stream_index) {
        Some(descriptor) => descriptor.codec_type,
        None => {
            // Not re-validated against the file: ffmpeg gets the index as-is
            // and its failure is surfaced if the stream does not exist.
            log::warn!(
                "Stream {} not in probe result for {}",
                args.stream_index,
                args.input_path.display()
            );
            CodecType::Unknown
        }
    };

    let display_name = args
        .input_path
        .file_name()
        .map(|name| truncate_name(&name.to_string_lossy()))
        .unwrap_or_else(|| args.input_path.display().to_string());
    print_info("Source", display_name);
    print_info("Stream", format!("{} ({})", args.stream_index, codec_type));

    let extractor = Extractor::new();
    let output_path = extractor.extract(&ExtractionRequest {
        source_path: args.input_path,
        stream_index: args.stream_index,
        codec_type,
    })?;

    print_success(&format!("Extracted to: {}", output_path.display()));

    Ok(())
}
