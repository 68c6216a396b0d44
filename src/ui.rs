pub fn render_index() -> String {
    INDEX_HTML.to_string()
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4ec;
      --bg-2: #cfe3c8;
      --ink: #27302a;
      --accent: #3f8f5a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4efe0 60%, #f2f6ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(880px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    .subtitle {
      margin: 0;
      color: #5c665e;
      font-size: 0.95rem;
    }

    nav {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .view {
      display: none;
    }

    .view.active {
      display: grid;
      gap: 20px;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat, .card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .stat {
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7d877f;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(63, 143, 90, 0.3);
    }

    .btn-ghost {
      background: rgba(47, 72, 88, 0.1);
      color: var(--accent-2);
    }

    .btn-small {
      padding: 8px 14px;
      font-size: 0.85rem;
    }

    .tab {
      background: transparent;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      color: #6b645d;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    form {
      display: grid;
      gap: 12px;
    }

    input {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 0.95rem;
      font-family: inherit;
    }

    input:focus {
      outline: 2px solid var(--accent);
      border-color: transparent;
    }

    .heatmap {
      display: grid;
      grid-template-columns: repeat(15, 1fr);
      gap: 6px;
    }

    .heat-cell {
      aspect-ratio: 1;
      border-radius: 6px;
      background: rgba(47, 72, 88, 0.08);
    }

    .heat-cell.level-1 { background: #bfe3c8; }
    .heat-cell.level-2 { background: #8ccf9f; }
    .heat-cell.level-3 { background: #5bb377; }
    .heat-cell.level-4 { background: var(--accent); }

    .progress-track {
      height: 14px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      width: 0;
      border-radius: 999px;
      background: var(--accent);
      transition: width 400ms ease;
    }

    #weekly-chart {
      width: 100%;
      height: 220px;
      display: block;
    }

    .chart-bar {
      fill: var(--accent);
      opacity: 0.85;
    }

    .chart-axis {
      stroke: rgba(47, 72, 88, 0.25);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    ul.activity {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    ul.activity li {
      display: flex;
      justify-content: space-between;
      gap: 12px;
      padding: 10px 14px;
      background: rgba(47, 72, 88, 0.05);
      border-radius: 12px;
      font-size: 0.92rem;
    }

    ul.activity .date {
      color: #7d877f;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th, td {
      text-align: left;
      padding: 10px 8px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.1);
      font-size: 0.92rem;
    }

    .quote {
      font-family: "Fraunces", "Georgia", serif;
      font-style: italic;
      color: var(--accent-2);
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .heatmap {
        grid-template-columns: repeat(10, 1fr);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Habit Tracker</h1>
        <p class="subtitle">Log your habits daily and watch the streak grow.</p>
      </div>
      <nav id="nav" hidden>
        <button class="tab active" type="button" data-view="dashboard">Dashboard</button>
        <button class="tab" type="button" data-view="habits">Habits</button>
        <button class="tab" type="button" id="logout-btn">Log out</button>
      </nav>
    </header>

    <section id="view-auth" class="view">
      <div class="card">
        <nav style="margin-bottom:16px">
          <button class="tab active" type="button" data-auth-tab="login">Log in</button>
          <button class="tab" type="button" data-auth-tab="register">Register</button>
        </nav>
        <form id="login-form" class="auth-form">
          <input name="email" type="email" placeholder="Email" required />
          <input name="password" type="password" placeholder="Password" required />
          <button class="btn-primary" type="submit">Log in</button>
        </form>
        <form id="register-form" class="auth-form" hidden>
          <input name="full_name" type="text" placeholder="Full name" required />
          <input name="email" type="email" placeholder="Email" required />
          <input name="password" type="password" placeholder="Password" required />
          <button class="btn-primary" type="submit">Create account</button>
        </form>
      </div>
    </section>

    <section id="view-dashboard" class="view">
      <div class="panel">
        <div class="stat">
          <span class="label">Habits</span>
          <span class="value" id="stat-total-habits">0</span>
        </div>
        <div class="stat">
          <span class="label">Completed today</span>
          <span class="value" id="stat-today-completed">0</span>
        </div>
        <div class="stat">
          <span class="label">Current streak</span>
          <span class="value" id="stat-current-streak">0 days</span>
        </div>
      </div>

      <div class="card">
        <h2>This month</h2>
        <div class="progress-track"><div class="progress-fill" id="progress-bar"></div></div>
        <p class="subtitle" id="progress-days" style="margin-top:8px"></p>
      </div>

      <div class="card">
        <h2>Last 30 days</h2>
        <div class="heatmap" id="heatmap"></div>
      </div>

      <div class="card">
        <h2>Weekly completion</h2>
        <svg id="weekly-chart" viewBox="0 0 600 220" role="img" aria-label="Weekly completion chart"></svg>
      </div>

      <div class="card">
        <h2>Recent activity</h2>
        <ul class="activity" id="recent-logs"></ul>
      </div>

      <p class="quote" id="quote-text"></p>
    </section>

    <section id="view-habits" class="view">
      <div class="card">
        <h2>New habit</h2>
        <form id="habit-form">
          <input name="name" type="text" placeholder="Habit name" required />
          <input name="description" type="text" placeholder="Description (optional)" />
          <button class="btn-primary" type="submit">Add habit</button>
        </form>
      </div>
      <div class="card">
        <h2>Your habits</h2>
        <table>
          <thead>
            <tr><th>Name</th><th>Description</th><th></th></tr>
          </thead>
          <tbody id="habit-list"></tbody>
        </table>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const TOKEN_KEY = 'access_token';
    const statusEl = document.getElementById('status');
    const navEl = document.getElementById('nav');

    const saveToken = (token) => localStorage.setItem(TOKEN_KEY, token);
    const getToken = () => localStorage.getItem(TOKEN_KEY);
    const clearToken = () => localStorage.removeItem(TOKEN_KEY);

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (message) {
        setTimeout(() => { statusEl.textContent = ''; }, 2500);
      }
    };

    const apiFetch = async (path, options = {}) => {
      const headers = Object.assign({ 'content-type': 'application/json' }, options.headers || {});
      const token = getToken();
      if (token) {
        headers['Authorization'] = `Bearer ${token}`;
      }
      const res = await fetch(path, { ...options, headers });
      if (res.status === 401) {
        clearToken();
        showView('auth');
        throw new Error('Session ended, please log in again');
      }
      if (!res.ok) {
        const text = await res.text();
        throw new Error(text || res.statusText);
      }
      return res.json();
    };

    const showView = (view) => {
      document.querySelectorAll('.view').forEach((section) => {
        section.classList.toggle('active', section.id === `view-${view}`);
      });
      navEl.hidden = view === 'auth';
      navEl.querySelectorAll('[data-view]').forEach((button) => {
        button.classList.toggle('active', button.dataset.view === view);
      });
    };

    const renderSummary = (summary) => {
      document.getElementById('stat-total-habits').textContent = summary.total_habits;
      document.getElementById('stat-today-completed').textContent = summary.completed_today;
      document.getElementById('stat-current-streak').textContent =
        summary.current_streak + (summary.current_streak === 1 ? ' day' : ' days');
    };

    const renderHeatmap = (cells) => {
      const container = document.getElementById('heatmap');
      container.innerHTML = '';
      cells.forEach((cell) => {
        const el = document.createElement('div');
        el.className = 'heat-cell' + (cell.level ? ` level-${cell.level}` : '');
        el.title = `${cell.date}: ${cell.count} completed`;
        container.appendChild(el);
      });
    };

    const renderProgress = (progress) => {
      document.getElementById('progress-bar').style.width = progress.percent + '%';
      document.getElementById('progress-days').textContent =
        `${progress.completed_days} of ${progress.total_days} days (${progress.percent}%)`;
    };

    const renderWeeklyChart = (weeks) => {
      const svg = document.getElementById('weekly-chart');
      const width = 600;
      const height = 220;
      const paddingX = 40;
      const paddingY = 30;
      const span = (width - paddingX * 2) / weeks.length;

      let marks = '';
      weeks.forEach((week, index) => {
        const barHeight = (height - paddingY * 2) * week.percent / 100;
        const x = paddingX + index * span + span * 0.15;
        const y = height - paddingY - barHeight;
        const center = paddingX + index * span + span / 2;
        marks += `<rect class="chart-bar" x="${x.toFixed(1)}" y="${y.toFixed(1)}" width="${(span * 0.7).toFixed(1)}" height="${barHeight.toFixed(1)}" rx="6" />`;
        marks += `<text class="chart-label" x="${center}" y="${y - 6}" text-anchor="middle">${week.percent}%</text>`;
        marks += `<text class="chart-label" x="${center}" y="${height - paddingY + 18}" text-anchor="middle">${week.week}</text>`;
      });
      marks += `<line class="chart-axis" x1="${paddingX}" y1="${height - paddingY}" x2="${width - paddingX}" y2="${height - paddingY}" />`;
      svg.innerHTML = marks;
    };

    const renderRecent = (items) => {
      const list = document.getElementById('recent-logs');
      list.innerHTML = '';
      items.forEach((item) => {
        const li = document.createElement('li');
        const name = document.createElement('strong');
        name.textContent = item.habit_name;
        const when = document.createElement('span');
        when.className = 'date';
        when.textContent = item.when.slice(0, 10);
        li.appendChild(name);
        li.appendChild(when);
        list.appendChild(li);
      });
    };

    const refreshDashboard = async () => {
      const [dashboard, progress, quote] = await Promise.all([
        apiFetch('/dashboard/'),
        apiFetch('/progress/month'),
        apiFetch('/quotes/'),
      ]);
      renderSummary(dashboard.summary);
      renderHeatmap(dashboard.heatmap);
      renderWeeklyChart(dashboard.weekly);
      renderRecent(dashboard.recent);
      renderProgress(progress);
      document.getElementById('quote-text').textContent = quote.quote;
    };

    const loadHabits = async () => {
      const habits = await apiFetch('/habits/');
      const list = document.getElementById('habit-list');
      list.innerHTML = '';
      habits.forEach((habit) => {
        const tr = document.createElement('tr');
        const name = document.createElement('td');
        name.textContent = habit.name;
        const description = document.createElement('td');
        description.textContent = habit.description || '';
        const actions = document.createElement('td');

        const done = document.createElement('button');
        done.className = 'btn-primary btn-small';
        done.textContent = 'Done today';
        done.addEventListener('click', async () => {
          try {
            await apiFetch('/logs/', {
              method: 'POST',
              body: JSON.stringify({ habit_id: habit.id }),
            });
            setStatus('Logged', 'ok');
          } catch (err) {
            setStatus(err.message, 'error');
          }
        });

        const remove = document.createElement('button');
        remove.className = 'btn-ghost btn-small';
        remove.textContent = 'Delete';
        remove.style.marginLeft = '6px';
        remove.addEventListener('click', async () => {
          if (!confirm('Delete this habit and all of its logs?')) {
            return;
          }
          try {
            await apiFetch(`/habits/${habit.id}`, { method: 'DELETE' });
            loadHabits();
          } catch (err) {
            setStatus(err.message, 'error');
          }
        });

        actions.appendChild(done);
        actions.appendChild(remove);
        tr.appendChild(name);
        tr.appendChild(description);
        tr.appendChild(actions);
        list.appendChild(tr);
      });
    };

    document.querySelectorAll('[data-auth-tab]').forEach((button) => {
      button.addEventListener('click', () => {
        document.querySelectorAll('[data-auth-tab]').forEach((b) => {
          b.classList.toggle('active', b === button);
        });
        document.getElementById('login-form').hidden = button.dataset.authTab !== 'login';
        document.getElementById('register-form').hidden = button.dataset.authTab !== 'register';
      });
    });

    document.getElementById('login-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const form = event.target;
      try {
        const data = await apiFetch('/auth/login', {
          method: 'POST',
          body: JSON.stringify({ email: form.email.value, password: form.password.value }),
        });
        saveToken(data.access_token);
        form.reset();
        showView('dashboard');
        refreshDashboard().catch((err) => setStatus(err.message, 'error'));
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('register-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const form = event.target;
      try {
        await apiFetch('/auth/register', {
          method: 'POST',
          body: JSON.stringify({
            full_name: form.full_name.value,
            email: form.email.value,
            password: form.password.value,
          }),
        });
        setStatus('Account created, you can log in now', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('habit-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const form = event.target;
      try {
        await apiFetch('/habits/', {
          method: 'POST',
          body: JSON.stringify({
            name: form.name.value,
            description: form.description.value || null,
          }),
        });
        form.reset();
        setStatus('Habit added', 'ok');
        loadHabits();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    navEl.querySelectorAll('[data-view]').forEach((button) => {
      button.addEventListener('click', () => {
        showView(button.dataset.view);
        if (button.dataset.view === 'dashboard') {
          refreshDashboard().catch((err) => setStatus(err.message, 'error'));
        } else {
          loadHabits().catch((err) => setStatus(err.message, 'error'));
        }
      });
    });

    document.getElementById('logout-btn').addEventListener('click', async () => {
      try {
        await apiFetch('/auth/logout', { method: 'POST' });
      } catch (err) {
        setStatus(err.message, 'error');
      }
      clearToken();
      showView('auth');
    });

    if (getToken()) {
      showView('dashboard');
      refreshDashboard().catch((err) => setStatus(err.message, 'error'));
    } else {
      showView('auth');
    }
  </script>
</body>
</html>
"#;
