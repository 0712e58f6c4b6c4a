use crate::models::{Report, ReportCatalog, VizType};
use crate::resolver::ResolvedRange;
use axum::http::StatusCode;

pub fn render_index() -> String {
    INDEX_HTML.replace("{{STYLE}}", PAGE_STYLE)
}

pub fn render_about() -> String {
    ABOUT_HTML.replace("{{STYLE}}", PAGE_STYLE)
}

pub fn render_faq() -> String {
    FAQ_HTML.replace("{{STYLE}}", PAGE_STYLE)
}

pub fn render_reports(catalog: &ReportCatalog) -> String {
    let mut rows = String::new();
    for (id, report) in &catalog.reports {
        let name = report.title().unwrap_or(id);
        let newest = report.dates.first().map(String::as_str).unwrap_or("-");
        rows.push_str(&format!(
            "<tr><td><a href=\"/reports/{id}\">{name}</a></td><td>{newest}</td><td>{count}</td></tr>\n",
            id = escape_html(id),
            name = escape_html(name),
            newest = escape_html(newest),
            count = report.dates.len(),
        ));
    }

    REPORTS_HTML
        .replace("{{STYLE}}", PAGE_STYLE)
        .replace("{{ROWS}}", &rows)
}

pub fn render_report(report_id: &str, report: &Report, range: &ResolvedRange) -> String {
    let template = match range.viz {
        VizType::Histogram => HISTOGRAM_HTML,
        VizType::Timeseries => TIMESERIES_HTML,
    };

    let title = report.title().unwrap_or(report_id);
    let start = range.start.as_deref().unwrap_or("");
    let end = range.end.as_deref().unwrap_or("");
    let payload =
        serde_json::to_string(&report.payload).unwrap_or_else(|_| "{}".to_string());

    template
        .replace("{{STYLE}}", PAGE_STYLE)
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{REPORT_ID}}", &escape_html(report_id))
        .replace("{{START}}", &escape_html(start))
        .replace("{{END}}", &escape_html(end))
        .replace("{{DATE_OPTIONS}}", &date_options(&report.dates))
        .replace("{{REPORT_JSON}}", &payload)
}

pub fn render_error(status: StatusCode, message: &str) -> String {
    ERROR_HTML
        .replace("{{STYLE}}", PAGE_STYLE)
        .replace("{{STATUS}}", &status.as_u16().to_string())
        .replace(
            "{{REASON}}",
            status.canonical_reason().unwrap_or("Error"),
        )
        .replace("{{MESSAGE}}", &escape_html(message))
}

fn date_options(dates: &[String]) -> String {
    dates
        .iter()
        .map(|date| {
            let date = escape_html(date);
            format!("<option value=\"{date}\">{date}</option>\n")
        })
        .collect()
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const PAGE_STYLE: &str = r#"
    body {
      margin: 0;
      min-height: 100vh;
      background: #f8f3e6;
      color: #2b2a28;
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }
    main {
      width: min(860px, 100%);
      margin: 0 auto;
      background: white;
      border-radius: 18px;
      border: 1px solid rgba(47, 72, 88, 0.12);
      padding: 32px;
    }
    h1 { margin-top: 0; }
    a { color: #2f4858; }
    nav a { margin-right: 14px; }
    table { width: 100%; border-collapse: collapse; }
    th, td { text-align: left; padding: 8px 10px; border-bottom: 1px solid rgba(47, 72, 88, 0.12); }
    .range { color: #5f5c57; }
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>Report Viewer</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main>
    <nav><a href="/">Home</a><a href="/reports">Reports</a><a href="/about">About</a><a href="/faq">FAQ</a></nav>
    <h1>Report Viewer</h1>
    <p>Precomputed reports, refreshed from the latest batch run. Browse the
    <a href="/reports">report list</a> to see what is available.</p>
  </main>
</body>
</html>
"#;

const ABOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>About - Report Viewer</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main>
    <nav><a href="/">Home</a><a href="/reports">Reports</a><a href="/about">About</a><a href="/faq">FAQ</a></nav>
    <h1>About</h1>
    <p>This site serves reports produced by an offline aggregation job. Each
    report carries a list of dates; pick one date for a snapshot or a range
    for a trend.</p>
  </main>
</body>
</html>
"#;

const FAQ_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>FAQ - Report Viewer</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main>
    <nav><a href="/">Home</a><a href="/reports">Reports</a><a href="/about">About</a><a href="/faq">FAQ</a></nav>
    <h1>FAQ</h1>
    <h2>How fresh is the data?</h2>
    <p>The catalog is reloaded from disk at most every three hours.</p>
    <h2>What do the <code>start</code> and <code>end</code> parameters take?</h2>
    <p>Any date label listed for the report, or the aliases
    <code>latest</code> and <code>earliest</code>.</p>
  </main>
</body>
</html>
"#;

const REPORTS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>Reports - Report Viewer</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main>
    <nav><a href="/">Home</a><a href="/reports">Reports</a><a href="/about">About</a><a href="/faq">FAQ</a></nav>
    <h1>Reports</h1>
    <table>
      <thead><tr><th>Report</th><th>Newest date</th><th>Dates</th></tr></thead>
      <tbody>
{{ROWS}}
      </tbody>
    </table>
  </main>
</body>
</html>
"#;

const HISTOGRAM_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>{{TITLE}} - Report Viewer</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main data-viz="histogram">
    <nav><a href="/">Home</a><a href="/reports">Reports</a><a href="/about">About</a><a href="/faq">FAQ</a></nav>
    <h1>{{TITLE}}</h1>
    <p class="range">Snapshot at <strong>{{START}}</strong></p>
    <form method="get" action="/reports/{{REPORT_ID}}">
      <label>Date <select name="start">{{DATE_OPTIONS}}</select></label>
      <button type="submit">Show</button>
    </form>
    <svg id="chart" viewBox="0 0 600 260" role="img" aria-label="Histogram"></svg>
    <script>
      window.reportData = {{REPORT_JSON}};
      window.reportRange = { start: "{{START}}", end: null };
    </script>
  </main>
</body>
</html>
"#;

const TIMESERIES_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>{{TITLE}} - Report Viewer</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main data-viz="timeseries">
    <nav><a href="/">Home</a><a href="/reports">Reports</a><a href="/about">About</a><a href="/faq">FAQ</a></nav>
    <h1>{{TITLE}}</h1>
    <p class="range">Trend from <strong>{{START}}</strong> to <strong>{{END}}</strong></p>
    <form method="get" action="/reports/{{REPORT_ID}}">
      <label>Start <select name="start">{{DATE_OPTIONS}}</select></label>
      <label>End <select name="end">{{DATE_OPTIONS}}</select></label>
      <button type="submit">Show</button>
    </form>
    <svg id="chart" viewBox="0 0 600 260" role="img" aria-label="Timeseries"></svg>
    <script>
      window.reportData = {{REPORT_JSON}};
      window.reportRange = { start: "{{START}}", end: "{{END}}" };
    </script>
  </main>
</body>
</html>
"#;

const ERROR_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>{{STATUS}} {{REASON}} - Report Viewer</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main>
    <nav><a href="/">Home</a><a href="/reports">Reports</a></nav>
    <h1>{{STATUS}} {{REASON}}</h1>
    <p>{{MESSAGE}}</p>
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }
}
