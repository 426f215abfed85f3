//! The dashboard page. Plotly draws the charts from the JSON chart views.

pub const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>Launch Records Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;margin:0;padding:16px 32px;color:#503D36}
h1{text-align:center;font-size:40px}
#site-dropdown{width:100%;padding:8px;font-size:14px}
.range{display:flex;gap:12px;align-items:center;margin:8px 0 4px}
.range input{flex:1}
#payload-label{min-width:160px;text-align:right;font-variant-numeric:tabular-nums}
.marks{display:flex;justify-content:space-between;font-size:11px;color:#888}
.chart{height:440px}
</style>
</head>
<body>
<h1>Launch Records Dashboard</h1>
<select id="site-dropdown"></select>
<div id="success-pie-chart" class="chart"></div>
<p>Payload range (kg):</p>
<div class="range">
  <input id="payload-low" type="range">
  <input id="payload-high" type="range">
  <span id="payload-label"></span>
</div>
<div id="payload-marks" class="marks"></div>
<div id="success-payload-scatter-chart" class="chart"></div>
<script>
const api = '/api/v1';
const site = document.getElementById('site-dropdown');
const low = document.getElementById('payload-low');
const high = document.getElementById('payload-high');
const label = document.getElementById('payload-label');

async function fetchView(path, params) {
  const res = await fetch(api + path + '?' + new URLSearchParams(params));
  if (!res.ok) throw new Error(await res.text());
  return res.json();
}

function drawProportion(id, view) {
  Plotly.react(id, [{
    type: 'pie',
    labels: view.slices.map(s => s.label),
    values: view.slices.map(s => s.value),
  }], {title: view.title});
}

function drawScatter(id, view) {
  const groups = new Map();
  for (const p of view.points) {
    if (!groups.has(p.booster_version_category)) groups.set(p.booster_version_category, []);
    groups.get(p.booster_version_category).push(p);
  }
  const traces = [...groups].map(([category, points]) => ({
    type: 'scatter', mode: 'markers', name: category,
    x: points.map(p => p.payload_mass_kg),
    y: points.map(p => p.class),
    text: points.map(p => p.booster_version),
  }));
  Plotly.react(id, traces, {
    title: view.title,
    xaxis: {title: 'Payload Mass (kg)'},
    yaxis: {title: 'class', tickvals: [0, 1]},
  });
}

function selectedRange() {
  const a = Number(low.value), b = Number(high.value);
  return a <= b ? [a, b] : [b, a];
}

async function onSiteChange() {
  drawProportion('success-pie-chart', await fetchView('/charts/outcomes', {site: site.value}));
  await onRangeChange();
}

async function onRangeChange() {
  const [a, b] = selectedRange();
  label.textContent = a + ' - ' + b;
  drawScatter('success-payload-scatter-chart',
    await fetchView('/charts/payload', {site: site.value, low: a, high: b}));
}

async function init() {
  const options = await fetchView('/summary', {});
  for (const opt of options.sites) {
    site.add(new Option(opt.label, opt.value));
  }
  for (const input of [low, high]) {
    input.min = options.slider.min;
    input.max = options.slider.max;
    input.step = options.slider.step;
  }
  low.value = options.slider.value.low;
  high.value = options.slider.value.high;
  document.getElementById('payload-marks').innerHTML =
    options.slider.marks.map(m => '<span>' + m + '</span>').join('');

  site.addEventListener('change', onSiteChange);
  low.addEventListener('change', onRangeChange);
  high.addEventListener('change', onRangeChange);
  await onSiteChange();
}

init();
</script>
</body>
</html>
"##;
