//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{load_or_default, EditorConfig, HttpParamsBackend, LoadOutcome};
use crossbeam_channel::{Receiver, Sender};
use reqwest::Client;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, config: EditorConfig) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let http = Client::new();
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Load => {
                        let _ = ui_tx.try_send(UiEvent::Info(format!(
                            "Loading from {}",
                            config.api_url
                        )));
                        let outcome = match HttpParamsBackend::with_client(
                            http.clone(),
                            &config.api_url,
                        ) {
                            Ok(backend) => load_or_default(&backend).await,
                            Err(err) => {
                                tracing::error!("cannot load parameters: {err}");
                                LoadOutcome {
                                    error: Some(err),
                                    ..LoadOutcome::default()
                                }
                            }
                        };
                        if ui_tx.send(UiEvent::Loaded(outcome)).is_err() {
                            tracing::debug!("ui event queue closed; stopping backend worker");
                            break;
                        }
                    }
                }
            }
        });
    });
}
