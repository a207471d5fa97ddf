use charming::{
    component::{
        Axis, DataView, DataZoom, DataZoomType, Feature, Grid, Legend, LegendSelectedMode,
        LegendType, Restore, SaveAsImage, Title, Toolbox, ToolboxDataZoom, VisualMap,
        VisualMapChannel,
    },
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, Label, LabelPosition,
        LineStyle, NameLocation, Orient, SplitLine, Symbol, TextAlign, TextStyle, Tooltip,
        Trigger,
    },
    datatype::DataPoint,
    series::{Heatmap, Line, Scatter},
    Chart,
};

pub struct BenchChart {
    pub inner: Chart,
}

const AXIS_TEXT_SIZE: u32 = 16;

impl BenchChart {
    /// Create a new `BenchChart` with default tooltip, legend, grid, and toolbox.
    pub fn new(title: &str, subtext: &str, dark: bool, strip_title_and_subtext: bool) -> Self {
        let chart = Chart::new();
        let chart = if !strip_title_and_subtext {
            chart.title(
                Title::new()
                    .text(title)
                    .text_align(TextAlign::Center)
                    .subtext(subtext)
                    .text_style(TextStyle::new().font_size(24).font_weight("bold"))
                    .subtext_style(TextStyle::new().font_size(14).line_height(20))
                    .left("50%")
                    .top("1%"),
            )
        } else {
            chart
        };
        let grid_top = if !strip_title_and_subtext {
            "12%"
        } else {
            "4%"
        };

        let chart = chart
            .tooltip(Tooltip::new().axis_pointer(AxisPointer::new().type_(AxisPointerType::Cross)))
            .legend(
                Legend::new()
                    .show(true)
                    .right("2%")
                    .top("middle")
                    .orient(Orient::Vertical)
                    .selected_mode(LegendSelectedMode::Multiple)
                    .text_style(TextStyle::new().font_size(12))
                    .padding(10)
                    .item_gap(10)
                    .item_width(25)
                    .item_height(14)
                    .type_(LegendType::Scroll),
            )
            .grid(
                Grid::new()
                    .left("5%")
                    .right("20%")
                    .top(grid_top)
                    .bottom("8%"),
            )
            .toolbox(
                Toolbox::new().feature(
                    Feature::new()
                        .data_zoom(ToolboxDataZoom::new())
                        .data_view(DataView::new())
                        .restore(Restore::new())
                        .save_as_image(SaveAsImage::new()),
                ),
            );

        let chart = if dark {
            chart.background_color("#242424")
        } else {
            chart
        };

        Self { inner: chart }
    }

    /// Add a horizontal zoom slider below the plot area.
    pub fn with_data_zoom(mut self) -> Self {
        self.inner = self.inner.data_zoom(
            DataZoom::new()
                .show(true)
                .type_(DataZoomType::Slider)
                .bottom("2%")
                .start(0)
                .end(100),
        );
        self
    }

    /// Show tooltips for the hovered item instead of the axis crosshair.
    pub fn with_item_tooltip(mut self) -> Self {
        self.inner = self.inner.tooltip(Tooltip::new().trigger(Trigger::Item));
        self
    }

    /// Configure a numeric X axis, e.g. batch size or throughput.
    pub fn with_value_x_axis(mut self, axis_label: &str) -> Self {
        self.inner = self.inner.x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(axis_label)
                .name_location(NameLocation::End)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .name_gap(15)
                .axis_label(AxisLabel::new())
                .split_line(SplitLine::new().show(true)),
        );
        self
    }

    /// Configure the X axis (category axis).
    pub fn with_category_x_axis(mut self, axis_label: &str, categories: Vec<String>) -> Self {
        self.inner = self.inner.x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name(axis_label)
                .name_location(NameLocation::End)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .name_gap(15)
                .data(categories)
                .split_line(SplitLine::new().show(true)),
        );
        self
    }

    pub fn with_category_y_axis(mut self, axis_label: &str, categories: Vec<String>) -> Self {
        self.inner = self.inner.y_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name(axis_label)
                .name_location(NameLocation::End)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .name_gap(15)
                .data(categories)
                .split_line(SplitLine::new().show(true)),
        );
        self
    }

    /// Configure a Y axis for e.g. p99 latency in ms.
    pub fn with_y_axis(mut self, axis_label: &str) -> Self {
        self.inner = self.inner.y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(axis_label)
                .name_location(NameLocation::End)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .name_gap(15)
                .position("left")
                .axis_label(AxisLabel::new())
                .split_line(SplitLine::new().show(true)),
        );
        self
    }

    /// Configure dual Y axes for e.g. latency in ms and throughput in msg/s.
    pub fn with_dual_y_axis(mut self, y1_label: &str, y2_label: &str) -> Self {
        self.inner = self.inner.y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(y1_label)
                .name_location(NameLocation::End)
                .name_gap(15)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .position("left")
                .axis_label(AxisLabel::new())
                .split_line(SplitLine::new().show(true)),
        );
        // Right axis gets no split lines so the two grids don't overlap
        self.inner = self.inner.y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(y2_label)
                .name_location(NameLocation::End)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .name_gap(15)
                .position("right")
                .axis_label(AxisLabel::new())
                .split_line(SplitLine::new().show(false)),
        );
        self
    }

    /// Add a line of `[x, y]` points plotted against the given Y axis.
    /// y_axis_index: 0 for left axis, 1 for right axis
    pub fn add_dual_series(
        mut self,
        name: &str,
        points: Vec<Vec<f64>>,
        symbol: Symbol,
        color: &str,
        y_axis_index: usize,
    ) -> Self {
        let line = Line::new()
            .name(name)
            .data(points)
            .symbol(symbol)
            .symbol_size(8.0)
            .line_style(LineStyle::new().width(3.0))
            .item_style(ItemStyle::new().color(color))
            .y_axis_index(y_axis_index as f64);

        self.inner = self.inner.series(line);
        self
    }

    /// Add unconnected `[x, y]` points.
    pub fn add_scatter_series(mut self, name: &str, points: Vec<Vec<f64>>, color: &str) -> Self {
        let scatter = Scatter::new()
            .name(name)
            .symbol_size(12.0)
            .data(points)
            .item_style(ItemStyle::new().color(color));

        self.inner = self.inner.series(scatter);
        self
    }

    /// Add unconnected points whose marker diameter is read from `size_dimension` of each point.
    pub fn add_sized_scatter_series(
        mut self,
        name: &str,
        points: Vec<Vec<f64>>,
        size_dimension: usize,
    ) -> Self {
        let scatter = Scatter::new()
            .name(name)
            .symbol_size(
                format!("function (value) {{ return value[{size_dimension}]; }}").as_str(),
            )
            .data(points);

        self.inner = self.inner.series(scatter);
        self
    }

    /// Add a text label beside each `[x, y]` point. The points themselves stay invisible.
    pub fn add_point_labels(mut self, name: &str, labelled: Vec<(Vec<f64>, String)>) -> Self {
        let labels = Line::new()
            .name(name)
            .data(labelled)
            .symbol_size(0.0)
            .line_style(LineStyle::new().width(0.0))
            .label(
                Label::new()
                    .show(true)
                    .position(LabelPosition::Right)
                    .formatter("{b}"),
            );

        self.inner = self.inner.series(labels);
        self
    }

    /// Add a heatmap of `[column, row, value]` cells over category axes.
    pub fn add_heatmap(mut self, name: &str, cells: Vec<Vec<f64>>) -> Self {
        let cells: Vec<Vec<DataPoint>> = cells
            .into_iter()
            .map(|cell| cell.into_iter().map(DataPoint::from).collect())
            .collect();
        let heatmap = Heatmap::new()
            .name(name)
            .label(Label::new().show(true))
            .data(cells);

        self.inner = self.inner.series(heatmap);
        self
    }

    /// Color series `series_index` by `dimension` of its points, mapping `[min, max]` onto
    /// `colors` and drawing the scale as a vertical color bar.
    pub fn with_visual_map(
        mut self,
        min: f64,
        max: f64,
        colors: Vec<&str>,
        dimension: usize,
        series_index: usize,
    ) -> Self {
        self.inner = self.inner.visual_map(
            VisualMap::new()
                .min(min)
                .max(max)
                .dimension(dimension as i64)
                .series_index(series_index as f64)
                .calculable(true)
                .orient(Orient::Vertical)
                .right("8%")
                .top("center")
                .in_range(VisualMapChannel::new().color(colors)),
        );
        self
    }
}
