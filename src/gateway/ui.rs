//! Embedded Browser UI
//!
//! A single-page shell served at `/`. It drives the same three-screen flow
//! as the terminal client (initial, upload, chat) against the `/api`
//! surface, with the document sidebar visible on the upload and chat
//! screens.

use axum::response::Html;

/// Serve the single-page UI
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>AI Document Assistant</title>
  <style>
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body { font-family: system-ui, -apple-system, sans-serif; background: #f3f4f6; color: #1f2937; }
    .layout { display: grid; grid-template-columns: 260px 1fr; max-width: 1000px; min-height: 100vh; margin: 0 auto; }
    .layout.no-sidebar { grid-template-columns: 1fr; }
    .sidebar { background: #111827; color: #e5e7eb; padding: 16px; display: flex; flex-direction: column; }
    .sidebar h2 { font-size: 15px; margin-bottom: 12px; }
    .doc { display: flex; align-items: center; justify-content: space-between; padding: 8px 10px; border-radius: 8px; background: #1f2937; margin-bottom: 6px; font-size: 13px; }
    .doc button { background: none; border: none; color: #9ca3af; cursor: pointer; font-size: 14px; }
    .doc button:hover { color: #f87171; }
    .doc button:disabled { opacity: 0.4; cursor: wait; }
    .empty { color: #6b7280; font-size: 13px; padding: 12px 0; }
    main { display: flex; flex-direction: column; padding: 24px; }
    h1 { font-size: 22px; text-align: center; margin-bottom: 20px; }
    .chat { flex: 1; overflow-y: auto; background: #fff; border-radius: 10px; padding: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); margin-bottom: 12px; }
    .msg { max-width: 80%; padding: 10px 14px; border-radius: 10px; margin-bottom: 10px; font-size: 14px; white-space: pre-wrap; }
    .msg.user { background: #3b82f6; color: #fff; margin-left: auto; }
    .msg.assistant { background: #f3f4f6; }
    .msg .sources { margin-top: 8px; font-size: 12px; color: #6b7280; }
    .msg .sources ul { padding-left: 18px; }
    form { display: flex; gap: 8px; }
    input[type=text] { flex: 1; padding: 10px 12px; border: 1px solid #d1d5db; border-radius: 8px; font-size: 14px; }
    button.primary { padding: 10px 18px; border: none; border-radius: 8px; background: #3b82f6; color: #fff; font-size: 14px; cursor: pointer; }
    button.primary:disabled { background: #9ca3af; cursor: not-allowed; }
    .upload-box { background: #fff; border: 2px dashed #d1d5db; border-radius: 10px; padding: 40px; text-align: center; margin-bottom: 12px; }
    .nav { margin-top: 12px; display: flex; gap: 8px; justify-content: center; }
    .nav button { padding: 8px 14px; border: 1px solid #d1d5db; border-radius: 8px; background: #fff; cursor: pointer; font-size: 13px; }
    .status { text-align: center; color: #6b7280; font-size: 13px; min-height: 18px; margin-bottom: 8px; }
  </style>
</head>
<body>
  <div class="layout no-sidebar" id="layout">
    <aside class="sidebar" id="sidebar" style="display: none;">
      <h2>Documents</h2>
      <div id="docList"><div class="empty">No documents uploaded yet</div></div>
    </aside>
    <main>
      <h1>AI Document Assistant</h1>
      <div class="status" id="status"></div>
      <div id="screen"></div>
    </main>
  </div>

  <script>
    // Mirrors the session state machine: three screens, one-level back memory.
    const state = {
      screen: 'initial',
      previous: null,
      documents: [],
      deleting: new Set(),
      messages: [],
      nextId: 1,
      pending: null,
    };

    function go(screen) {
      state.previous = state.screen;
      state.screen = screen;
      render();
    }

    function back() {
      if (state.previous === null) return;
      const target = state.previous;
      state.previous = state.screen;
      state.screen = target;
      render();
    }

    async function refreshDocuments() {
      try {
        const res = await fetch('/api/list');
        const data = await res.json();
        state.documents = data.documents || [];
      } catch {
        state.documents = [];
      }
      render();
    }

    async function deleteDocument(name) {
      if (state.deleting.has(name)) return;
      state.deleting.add(name);
      render();
      try {
        const res = await fetch('/api/delete/' + encodeURIComponent(name), { method: 'DELETE' });
        if (res.ok) await refreshDocuments();
        else {
          const data = await res.json();
          setStatus(data.error || 'Failed to delete document');
        }
      } catch {
        setStatus('Failed to delete document');
      } finally {
        state.deleting.delete(name);
        render();
      }
    }

    async function uploadFile(file) {
      const form = new FormData();
      form.append('file', file);
      setStatus('Uploading ' + file.name + '...');
      try {
        const res = await fetch('/api/upload', { method: 'POST', body: form });
        if (res.ok) {
          setStatus('Uploaded ' + file.name);
          await refreshDocuments();
          go('chat');
        } else {
          const data = await res.json();
          setStatus(data.error || 'Upload failed');
        }
      } catch {
        setStatus('Upload failed');
      }
    }

    async function sendChat(text) {
      if (state.pending !== null) return;
      state.messages.push({ id: state.nextId++, role: 'user', content: text });
      const placeholderId = state.nextId++;
      state.messages.push({ id: placeholderId, role: 'assistant', content: 'Thinking...', loading: true });
      state.pending = placeholderId;
      render();
      let replacement;
      try {
        const res = await fetch('/api/chat', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ query: text }),
        });
        const data = await res.json();
        replacement = res.ok
          ? { content: data.response, sources: data.sources || [] }
          : { content: data.error || 'Sorry, something went wrong. Please try again.' };
      } catch {
        replacement = { content: 'Sorry, something went wrong. Please try again.' };
      }
      const msg = state.messages.find(m => m.id === placeholderId);
      if (msg) Object.assign(msg, replacement, { loading: false });
      state.pending = null;
      render();
    }

    function setStatus(text) {
      document.getElementById('status').textContent = text;
    }

    function escapeHtml(text) {
      const div = document.createElement('div');
      div.textContent = text;
      return div.innerHTML;
    }

    function renderSidebar() {
      const sidebar = document.getElementById('sidebar');
      const layout = document.getElementById('layout');
      const visible = state.screen !== 'initial';
      sidebar.style.display = visible ? 'flex' : 'none';
      layout.className = visible ? 'layout' : 'layout no-sidebar';
      const list = document.getElementById('docList');
      if (state.documents.length === 0) {
        list.innerHTML = '<div class="empty">No documents uploaded yet</div>';
        return;
      }
      list.innerHTML = state.documents.map(d => `
        <div class="doc">
          <span>${escapeHtml(d.file_name)}</span>
          <button ${state.deleting.has(d.file_name) ? 'disabled' : ''}
                  onclick="deleteDocument('${escapeHtml(d.file_name)}')">&times;</button>
        </div>`).join('');
    }

    function renderMessages(messages) {
      return messages.map(m => `
        <div class="msg ${m.role}">
          ${escapeHtml(m.content)}
          ${m.sources && m.sources.length ? `
            <div class="sources">Sources:<ul>${m.sources.map(s => `<li>${escapeHtml(s)}</li>`).join('')}</ul></div>` : ''}
        </div>`).join('');
    }

    function render() {
      renderSidebar();
      const screen = document.getElementById('screen');
      if (state.screen === 'initial') {
        screen.innerHTML = `
          <div class="chat">
            <div class="msg assistant">Hello! I can analyze documents you upload.
Would you like to upload a document or chat about existing ones?</div>
          </div>
          <div class="nav">
            <button onclick="go('upload')">Upload a document</button>
            <button onclick="requestChat()">Chat about existing documents</button>
          </div>`;
      } else if (state.screen === 'upload') {
        screen.innerHTML = `
          <div class="upload-box">
            <p>Select a PDF to upload</p>
            <p style="margin-top: 12px;"><input type="file" id="fileInput" accept=".pdf"></p>
          </div>
          <div class="nav">
            <button onclick="go('chat')">Start Chatting</button>
            <button onclick="back()">Back</button>
          </div>`;
        document.getElementById('fileInput').addEventListener('change', e => {
          if (e.target.files.length) uploadFile(e.target.files[0]);
        });
      } else {
        screen.innerHTML = `
          <div class="chat" id="chatLog">${renderMessages(state.messages)}</div>
          <form id="chatForm">
            <input type="text" id="chatInput" placeholder="Ask a question..."
                   ${state.pending !== null ? 'disabled' : ''}>
            <button class="primary" ${state.pending !== null ? 'disabled' : ''}>Send</button>
          </form>
          <div class="nav">
            <button onclick="go('upload')">Upload Another Document</button>
            <button onclick="back()">Back</button>
          </div>`;
        const log = document.getElementById('chatLog');
        log.scrollTop = log.scrollHeight;
        document.getElementById('chatForm').addEventListener('submit', e => {
          e.preventDefault();
          const input = document.getElementById('chatInput');
          const text = input.value.trim();
          if (!text) return;
          input.value = '';
          sendChat(text);
        });
      }
    }

    // Chat only proceeds when at least one document exists.
    function requestChat() {
      go(state.documents.length > 0 ? 'chat' : 'upload');
    }

    refreshDocuments();
    render();
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_page_targets_the_api_surface() {
        assert!(INDEX_HTML.contains("/api/list"));
        assert!(INDEX_HTML.contains("/api/chat"));
        assert!(INDEX_HTML.contains("/api/upload"));
        assert!(INDEX_HTML.contains("/api/delete/"));
    }
}
