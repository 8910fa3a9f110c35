// main.rs
use std::io;

use anyhow::Result;

use release_editor::app::{ConsolePrompter, EditorApp};
use release_editor::config::CONFIG;
use release_editor::session::{EditorSession, SessionBuilder};

fn main() -> Result<()> {
    println!("--- Phasor Release Editor ---");

    // 1. 按配置创建会话，自动加载的文件失败时退回空会话
    let session = match SessionBuilder::from_app_config(&CONFIG).build() {
        Ok(session) => session,
        Err(e) => {
            eprintln!(" [Error] {}", e);
            EditorSession::new(CONFIG.editor.clone())
        }
    };

    println!(" 输入 'help' 查看命令 (输入 'quit' 退出)");

    // 2. 主线程循环：读取命令并交给控制器
    let stdin = io::stdin();
    let prompter = ConsolePrompter::new(stdin.lock(), io::stdout());
    let mut app = EditorApp::new(session, prompter);
    app.run()?;

    Ok(())
}
