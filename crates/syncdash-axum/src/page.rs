//! Server-rendered dashboard page and favicon.

use syncdash_core::{LogView, SyncStatus};

/// Shown in place of the log when there is nothing to display.
pub const EMPTY_LOG_PLACEHOLDER: &str = "No sync logs yet...";

/// Document icon served at `/favicon.ico`.
pub const FAVICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32">
    <rect width="32" height="32" fill="#161b22"/>
    <rect x="8" y="6" width="16" height="20" rx="1" fill="#58a6ff" stroke="#30363d"/>
    <line x1="10" y1="10" x2="22" y2="10" stroke="#161b22" stroke-width="1"/>
    <line x1="10" y1="13" x2="22" y2="13" stroke="#161b22" stroke-width="1"/>
    <line x1="10" y1="16" x2="18" y2="16" stroke="#161b22" stroke-width="1"/>
</svg>"##;

const STYLES: &str = r"
body { font-family: 'Monaco', 'Menlo', monospace; margin: 0; background: #0d1117; color: #c9d1d9; }
.container { max-width: 1400px; margin: 0 auto; padding: 20px; }
.header { background: #161b22; padding: 20px; border-radius: 8px; margin-bottom: 20px; border: 1px solid #30363d; }
h1 { color: #58a6ff; margin: 0; font-size: 2.2em; }
.controls-status { display: flex; justify-content: space-between; align-items: center; padding: 15px;
    background: #161b22; border: 1px solid #30363d; border-radius: 8px; margin-bottom: 20px; }
.system-status { color: #7d8590; font-size: 14px; }
.controls { display: flex; gap: 10px; flex-wrap: wrap; }
.btn { background: #21262d; color: #f0f6fc; padding: 12px 24px; border: 1px solid #30363d; border-radius: 6px;
    cursor: pointer; font-family: inherit; font-size: 14px; transition: all 0.2s ease; }
.btn:hover { background: #30363d; }
.btn.primary { background: #238636; border-color: #2ea043; }
.btn.primary:hover { background: #2ea043; }
.log-section { background: #0d1117; border: 1px solid #30363d; border-radius: 8px; }
.log-header { background: #161b22; padding: 15px; border-bottom: 1px solid #30363d; font-weight: bold; }
.log-content { background: #010409; padding: 20px; max-height: 75vh; overflow-y: auto; white-space: pre-wrap;
    font-size: 13px; line-height: 1.4; scrollbar-width: thin; scrollbar-color: #30363d #0d1117; }
.timestamp { color: #7d8590; }
@media (max-width: 768px) {
    .controls { flex-direction: column; }
    .btn { width: 100%; }
}
";

const SCRIPT: &str = r"
function apiRequest(endpoint, method = 'GET', data = null) {
    const options = { method: method, headers: { 'Content-Type': 'application/json' } };
    if (data) options.body = JSON.stringify(data);
    return fetch(endpoint, options).then(response => {
        if (!response.ok) throw new Error(`HTTP ${response.status}`);
        return response;
    });
}

function showNotification(message, type = 'info') {
    const colors = { success: '#3fb950', error: '#f85149', warning: '#d29922', info: '#79c0ff' };
    const notification = document.createElement('div');
    notification.style.cssText = `
        position: fixed; top: 20px; right: 20px; z-index: 1000;
        background: ${colors[type] || colors.info}; color: white; padding: 15px 20px;
        border-radius: 6px; box-shadow: 0 4px 12px rgba(0,0,0,0.3);
        max-width: 300px; word-wrap: break-word;
    `;
    notification.textContent = message;
    document.body.appendChild(notification);
    setTimeout(() => notification.remove(), 4000);
}

function clearLogs() {
    if (!confirm('Are you sure you want to clear all logs?')) return;
    apiRequest('/clear', 'POST')
        .then(() => {
            showNotification('Logs cleared successfully!', 'success');
            setTimeout(() => location.reload(), 1000);
        })
        .catch(err => showNotification(`Error clearing logs: ${err.message}`, 'error'));
}

function runSync() {
    if (!confirm('Run sync script now? This may take several minutes.')) return;
    showNotification('Sync started! Check logs for progress...', 'info');
    apiRequest('/run', 'POST')
        .then(() => setTimeout(() => location.reload(), 2000))
        .catch(err => showNotification(`Error starting sync: ${err.message}`, 'error'));
}

document.addEventListener('keydown', (e) => {
    if (!(e.ctrlKey || e.metaKey)) return;
    switch (e.key) {
        case 'r': e.preventDefault(); location.reload(); break;
        case 'Enter': e.preventDefault(); runSync(); break;
    }
});
";

/// One-, five- and fifteen-minute load averages.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

impl LoadAverage {
    /// Current host load, zeros where the platform has no notion of it.
    pub fn current() -> Self {
        let load = sysinfo::System::load_average();
        Self {
            one: load.one,
            five: load.five,
            fifteen: load.fifteen,
        }
    }
}

/// Everything the dashboard page shows.
#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub log: LogView,
    pub status: SyncStatus,
    pub load: LoadAverage,
    pub log_size_mb: f64,
    /// Preformatted local time, `%Y-%m-%d %H:%M:%S`.
    pub last_updated: String,
}

impl DashboardPage {
    pub fn render(&self) -> String {
        let log = if self.log.is_blank() {
            EMPTY_LOG_PLACEHOLDER.to_string()
        } else {
            escape_html(&self.log.text)
        };
        let LoadAverage { one, five, fifteen } = self.load;

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>Rsync Backup Management</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link rel="icon" href="/favicon.ico" type="image/svg+xml">
    <style>{STYLES}</style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>📄 Rsync Backup Management</h1>
            <div class="timestamp">Last updated: {last_updated}</div>
        </div>
        <div class="controls-status">
            <div class="system-status">
                💾 Load: {one:.2}, {five:.2}, {fifteen:.2} |
                📄 Log Size: {size:.2} MB |
                <span style="color: {color}; font-weight: bold;">{label}</span>
            </div>
            <div class="controls">
                <button class="btn primary" onclick="runSync()">▶️ Run Sync Now</button>
                <button class="btn" onclick="location.reload()">🔄 Refresh</button>
                <button class="btn" onclick="clearLogs()">🗑️ Clear Logs</button>
            </div>
        </div>
        <div class="log-section">
            <div class="log-header">📋 Sync Logs</div>
            <div class="log-content" id="syncLogs">{log}</div>
        </div>
    </div>
    <script>{SCRIPT}</script>
</body>
</html>"#,
            last_updated = escape_html(&self.last_updated),
            size = self.log_size_mb,
            color = self.status.color(),
            label = self.status.label(),
        )
    }
}

/// Escapes text for use inside HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
