//! Registration actor
//!
//! One task owns the controller. Screen events arrive as commands, each new
//! state is published on a watch channel, and a submit's store work runs on
//! its own task that reports back to the actor when it completes.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, warn};

use crate::domain::registration::{FormEvent, RegistrationState, SubmitOutcome};
use crate::domain::user::{PersistedUser, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::UserService;

use super::controller::{register_form, RegistrationController};

const COMMAND_BUFFER: usize = 32;

/// Commands accepted by the registration actor
#[derive(Debug)]
pub enum RegistrationCommand {
    /// Apply a field or toggle event
    Edit(FormEvent),
    /// Submit the current form
    Submit {
        respond_to: oneshot::Sender<SubmitOutcome>,
    },
    /// Discard the form, banner and summary
    Reset,
}

/// Cloneable handle to a running registration actor
#[derive(Debug, Clone)]
pub struct RegistrationHandle {
    commands: mpsc::Sender<RegistrationCommand>,
    state: watch::Receiver<RegistrationState>,
}

impl RegistrationHandle {
    /// Spawn the actor on the current runtime
    pub fn spawn<R: UserRepository + 'static>(service: Arc<UserService<R>>) -> Self {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (state_tx, state_rx) = watch::channel(RegistrationState::default());

        let actor = RegistrationActor {
            controller: RegistrationController::new(service),
            state_tx,
            pending: None,
        };
        tokio::spawn(actor.run(command_rx));

        Self {
            commands: command_tx,
            state: state_rx,
        }
    }

    /// Send a field or toggle event
    pub async fn edit(&self, event: FormEvent) -> Result<(), DomainError> {
        self.send(RegistrationCommand::Edit(event)).await
    }

    /// Submit and wait for the outcome
    pub async fn submit(&self) -> Result<SubmitOutcome, DomainError> {
        let (respond_to, response) = oneshot::channel();
        self.send(RegistrationCommand::Submit { respond_to }).await?;

        response
            .await
            .map_err(|_| DomainError::internal("Registration actor dropped the submit"))
    }

    pub async fn reset(&self) -> Result<(), DomainError> {
        self.send(RegistrationCommand::Reset).await
    }

    /// Latest published state
    pub fn current(&self) -> RegistrationState {
        self.state.borrow().clone()
    }

    /// Receiver observing every state change
    pub fn subscribe(&self) -> watch::Receiver<RegistrationState> {
        self.state.clone()
    }

    async fn send(&self, command: RegistrationCommand) -> Result<(), DomainError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| DomainError::internal("Registration actor is not running"))
    }
}

struct RegistrationActor<R: UserRepository> {
    controller: RegistrationController<R>,
    state_tx: watch::Sender<RegistrationState>,
    pending: Option<oneshot::Sender<SubmitOutcome>>,
}

impl<R: UserRepository + 'static> RegistrationActor<R> {
    async fn run(mut self, mut commands: mpsc::Receiver<RegistrationCommand>) {
        let (done_tx, mut done_rx) = mpsc::channel::<Result<PersistedUser, DomainError>>(1);

        loop {
            tokio::select! {
                command = commands.recv() => {
                    match command {
                        Some(command) => self.handle(command, &done_tx),
                        None => break,
                    }
                }
                Some(result) = done_rx.recv() => {
                    let outcome = self.controller.finish_submit(result);
                    self.publish();

                    if let Some(respond_to) = self.pending.take() {
                        let _ = respond_to.send(outcome);
                    }
                }
            }
        }

        debug!("Registration actor stopped");
    }

    fn handle(
        &mut self,
        command: RegistrationCommand,
        done_tx: &mpsc::Sender<Result<PersistedUser, DomainError>>,
    ) {
        match command {
            RegistrationCommand::Edit(event) => {
                self.controller.apply(event);
            }
            RegistrationCommand::Reset => self.controller.reset(),
            RegistrationCommand::Submit { respond_to } => match self.controller.begin_submit() {
                Err(outcome) => {
                    let _ = respond_to.send(outcome);
                }
                Ok(form) => {
                    self.pending = Some(respond_to);

                    let service = self.controller.service();
                    let done_tx = done_tx.clone();
                    tokio::spawn(async move {
                        let result = register_form(&service, &form).await;
                        if done_tx.send(result).await.is_err() {
                            warn!("Registration finished after the actor stopped");
                        }
                    });
                }
            },
        }

        self.publish();
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.controller.state().clone());
    }
}
