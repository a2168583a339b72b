use crate::cli::StreamsArgs;
use crate::output::{print_heading, print_info, print_warning, truncate_name};
use trackrip_core::{CoreResult, StreamDescriptor, check_dependency, probe_streams};

/// Execute the streams command: probe a container and render its stream table.
pub fn run_streams(args: StreamsArgs) -> CoreResult<()> {
    check_dependency("ffprobe")?;

    let streams = probe_streams(&args.input_path)?;

    let display_name = args
        .input_path
        .file_name()
        .map(|name| truncate_name(&name.to_string_lossy()))
        .unwrap_or_else(|| args.input_path.display().to_string());
    print_heading(&display_name);

    if streams.is_empty() {
        print_warning("No streams found.");
        return Ok(());
    }

    for stream in &streams {
        println!("  {}", format_stream(stream));
    }
    print_info("Streams", streams.len());

    Ok(())
}

/// One display line per descriptor; absent metadata renders as an explicit
/// placeholder, mirroring what the container did not carry.
fn format_stream(stream: &StreamDescriptor) -> String {
    let codec = stream.codec_name.as_deref().unwrap_or("unknown");
    let language = stream.language.as_deref().unwrap_or("unknown");
    let title = stream.title.as_deref().unwrap_or("none");

    let mut line = format!(
        "[{}] {} / {}   language: {}   title: {}",
        stream.index, stream.codec_type, codec, language, title
    );
    if let Some(secs) = stream.duration_secs {
        line.push_str(&format!("   duration: {secs:.2}s"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackrip_core::CodecType;

    #[test]
    fn test_format_stream_with_full_metadata() {
        let stream = StreamDescriptor {
            index: 2,
            codec_type: CodecType::Subtitle,
            codec_name: Some("subrip".to_string()),
            language: Some("jpn".to_string()),
            title: Some("Signs".to_string()),
            duration_secs: Some(5404.5),
        };
        assert_eq!(
            format_stream(&stream),
            "[2] subtitle / subrip   language: jpn   title: Signs   duration: 5404.50s"
        );
    }

    #[test]
    fn test_format_stream_with_absent_metadata() {
        let stream = StreamDescriptor {
            index: 0,
            codec_type: CodecType::Unknown,
            codec_name: None,
            language: None,
            title: None,
            duration_secs: None,
        };
        assert_eq!(
            format_stream(&stream),
            "[0] unknown / unknown   language: unknown   title: none"
        );
    }
}
