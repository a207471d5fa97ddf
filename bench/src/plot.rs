use crate::args::defaults::COMBINED_FILE_NAME;
use crate::error::PlotError;
use batch_bench_report::plotting::chart_kind::ChartKind;
use charming::theme::Theme;
use charming::{Chart, HtmlRenderer};
use std::path::{Path, PathBuf};
use std::process::Command;

const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub output_directory: PathBuf,
    pub width: u64,
    pub height: u64,
    pub dark: bool,
}

impl RenderOptions {
    fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Default
        }
    }
}

/// Save one chart as `<output>/<kind>.html`.
pub fn save_chart(
    chart: &Chart,
    kind: ChartKind,
    options: &RenderOptions,
) -> Result<PathBuf, PlotError> {
    create_output_directory(&options.output_directory)?;
    let full_output_path = options
        .output_directory
        .join(format!("{}.html", kind.file_stem()));

    let mut renderer =
        HtmlRenderer::new(&kind.title(), options.width, options.height).theme(options.theme());
    renderer
        .save(chart, &full_output_path)
        .map_err(|e| PlotError::Render {
            name: kind.to_string(),
            reason: e.to_string(),
        })?;
    Ok(full_output_path)
}

/// Save all charts stacked on a single page, `<output>/charts.html`.
pub fn save_combined(
    charts: &[(ChartKind, Chart)],
    options: &RenderOptions,
) -> Result<PathBuf, PlotError> {
    create_output_directory(&options.output_directory)?;
    let full_output_path = options
        .output_directory
        .join(format!("{COMBINED_FILE_NAME}.html"));

    let page = combined_page(charts, options);
    std::fs::write(&full_output_path, page).map_err(|source| PlotError::Write {
        path: full_output_path.clone(),
        source,
    })?;
    Ok(full_output_path)
}

fn combined_page(charts: &[(ChartKind, Chart)], options: &RenderOptions) -> String {
    let (theme, background) = if options.dark {
        ("dark", "#242424")
    } else {
        ("", "#ffffff")
    };

    let mut body = String::new();
    for (index, (kind, chart)) in charts.iter().enumerate() {
        let stem = kind.file_stem();
        let option = chart.to_string();
        body.push_str(&format!(
            r#"<div id="chart-{index}" data-chart="{stem}" style="width: {width}px; height: {height}px; margin: 0 auto 24px;"></div>
<script type="text/javascript">
  echarts.init(document.getElementById("chart-{index}"), "{theme}").setOption({option});
</script>
"#,
            width = options.width,
            height = options.height,
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Benchmark Charts</title>
  <script src="{ECHARTS_SCRIPT}"></script>
</head>
<body style="background: {background};">
{body}</body>
</html>
"#
    )
}

fn create_output_directory(path: &Path) -> Result<(), PlotError> {
    std::fs::create_dir_all(path).map_err(|source| PlotError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Hand the file to the platform's default opener without waiting for it.
pub fn open_in_browser(path: &Path) -> Result<(), PlotError> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else {
        Command::new("xdg-open")
    };
    command
        .arg(path)
        .spawn()
        .map(|_| ())
        .map_err(|source| PlotError::Open {
            path: path.to_path_buf(),
            source,
        })
}
