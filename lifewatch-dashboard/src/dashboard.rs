// Lifewatch Dashboard - HTML view
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Server-rendered dashboard page.
//!
//! The page shows the reading it was rendered with and then keeps itself
//! current by polling `/api/data` and `/api/history`.

use lifewatch::{format_timestamp, HistorySnapshot, SensorReading};

/// History rows rendered into the page.
pub const DASHBOARD_HISTORY_ROWS: usize = 10;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Lifewatch Dashboard</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 1000px; margin: 40px auto; padding: 20px; background: #f5f6fa; color: #2c3e50; }
        h1 { margin-bottom: 4px; }
        .updated { color: #7f8c8d; font-size: 0.9em; }
        .cards { display: flex; gap: 16px; margin: 24px 0; }
        .card { flex: 1; background: #fff; padding: 20px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
        .card .value { font-size: 2em; font-weight: 600; }
        .status { display: inline-block; padding: 6px 14px; border-radius: 16px; font-weight: 600; text-transform: uppercase; }
        .status-live { background: #d4f8e8; color: #1e8449; }
        .status-uncertain { background: #fdebd0; color: #b9770e; }
        .status-deceased { background: #fadbd8; color: #c0392b; }
        .controls button { margin-right: 8px; padding: 8px 16px; border: none; border-radius: 4px; background: #3498db; color: #fff; cursor: pointer; }
        .controls .message { margin-left: 8px; color: #7f8c8d; }
        table { width: 100%; border-collapse: collapse; background: #fff; }
        th, td { padding: 8px; border-bottom: 1px solid #ecf0f1; text-align: left; }
    </style>
</head>
<body>
    <h1>Lifewatch</h1>
    <div class="updated">Last updated: <span id="last-updated">{{last_updated}}</span></div>

    <div class="cards">
        <div class="card"><div>Temperature</div><div class="value"><span id="temperature">{{temperature}}</span> &deg;C</div></div>
        <div class="card"><div>Gas Level</div><div class="value"><span id="gas">{{gas}}</span> ppm</div></div>
        <div class="card"><div>Sound Level</div><div class="value"><span id="sound">{{sound}}</span> dB</div></div>
        <div class="card"><div>Status</div><div><span id="status" class="status status-{{status}}">{{status}}</span></div></div>
    </div>

    <div class="controls">
        <button onclick="control('start')">Start</button>
        <button onclick="control('stop')">Stop</button>
        <button onclick="control('reset')">Reset Alerts</button>
        <span id="control-message" class="message"></span>
    </div>

    <h2>Readings</h2>
    <canvas id="chart" height="120"></canvas>

    <h2>Detection History</h2>
    <table>
        <thead><tr><th>Time</th><th>Temperature</th><th>Gas</th><th>Sound</th><th>Status</th></tr></thead>
        <tbody id="history">
{{history_rows}}
        </tbody>
    </table>

    <script>
        const chart = new Chart(document.getElementById('chart'), {
            type: 'line',
            data: { labels: [], datasets: [] },
            options: { animation: false }
        });

        function row(entry) {
            return '<tr><td>' + entry.timestamp + '</td><td>' + entry.temperature + ' &deg;C</td><td>' +
                entry.gas + ' ppm</td><td>' + entry.sound + ' dB</td><td><span class="status status-' +
                entry.status + '">' + entry.status + '</span></td></tr>';
        }

        async function refresh() {
            const data = await (await fetch('/api/data')).json();
            chart.data.labels = data.labels;
            chart.data.datasets = data.datasets;
            chart.update();

            const reading = data.sensor_data;
            document.getElementById('temperature').textContent = reading.temperature;
            document.getElementById('gas').textContent = reading.gas;
            document.getElementById('sound').textContent = reading.sound;
            document.getElementById('last-updated').textContent = reading.last_updated;
            const status = document.getElementById('status');
            status.textContent = reading.status;
            status.className = 'status status-' + reading.status;

            const history = await (await fetch('/api/history')).json();
            document.getElementById('history').innerHTML =
                history.history.slice(0, {{history_limit}}).map(row).join('');
        }

        async function control(action) {
            const response = await fetch('/api/control', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ action })
            });
            const ack = await response.json();
            document.getElementById('control-message').textContent = ack.message;
        }

        refresh();
        setInterval(refresh, 5000);
    </script>
</body>
</html>
"#;

fn history_row(entry: &HistorySnapshot) -> String {
    format!(
        "            <tr><td>{}</td><td>{} &deg;C</td><td>{} ppm</td><td>{} dB</td><td><span class=\"status status-{}\">{}</span></td></tr>",
        format_timestamp(&entry.timestamp),
        entry.temperature,
        entry.gas,
        entry.sound,
        entry.status,
        entry.status
    )
}

/// Render the dashboard for `reading` and its most recent history
/// (already ordered most-recent-first).
pub fn render_dashboard(reading: &SensorReading, history: &[HistorySnapshot]) -> String {
    let rows = history
        .iter()
        .take(DASHBOARD_HISTORY_ROWS)
        .map(history_row)
        .collect::<Vec<_>>()
        .join("\n");

    TEMPLATE
        .replace("{{last_updated}}", &format_timestamp(&reading.last_updated))
        .replace("{{temperature}}", &reading.temperature.to_string())
        .replace("{{gas}}", &reading.gas.to_string())
        .replace("{{sound}}", &reading.sound.to_string())
        .replace("{{status}}", reading.status.as_str())
        .replace("{{history_limit}}", &DASHBOARD_HISTORY_ROWS.to_string())
        .replace("{{history_rows}}", &rows)
}
