//! Process abstraction
//! ChainedProcess is monomorphised – the compiler knows the concrete
//! type of every stage and inlines the whole chain. Used for the fixed
//! tokenizer cleanup.
//! DynamicProcess is the extensible fallback: stages behind `Arc<dyn Stage>`,
//! so callers can append their own.
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};
use tracing::warn;

pub trait Process: Send + Sync {
    /// Run every stage, stopping at the first failure.
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;

    /// Run every stage, skipping any that fails. The text as it stood before a
    /// failing stage is carried forward unchanged.
    fn process_lenient<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

pub struct EmptyProcess;
impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(text)
    }

    #[inline(always)]
    fn process_lenient<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        text
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let current: Cow<'_, str> = self.previous.process(text, ctx)?;
        if !self.stage.needs_apply(&current, ctx)? {
            return Ok(current);
        }
        self.stage.apply(current, ctx)
    }

    #[inline(always)]
    fn process_lenient<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let current = self.previous.process_lenient(text, ctx);
        apply_lenient(&self.stage, current, ctx)
    }
}

#[derive(Default)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage + Send + Sync>; 12]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + Send + Sync + 'static>(self, stage: T) -> Self {
        self.push_arc(Arc::new(stage))
    }

    #[inline(always)]
    pub fn push_arc(mut self, stage: Arc<dyn Stage + Send + Sync>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Process for DynamicProcess {
    #[inline(always)]
    fn process<'a>(
        &self,
        mut text: Cow<'a, str>,
        ctx: &Context,
    ) -> Result<Cow<'a, str>, StageError> {
        for stage in &self.stages {
            if !stage.needs_apply(&text, ctx)? {
                continue;
            }
            text = stage.apply(text, ctx)?;
        }
        Ok(text)
    }

    fn process_lenient<'a>(&self, mut text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        for stage in &self.stages {
            text = apply_lenient(stage.as_ref(), text, ctx);
        }
        text
    }
}

fn apply_lenient<'a, S: Stage + ?Sized>(stage: &S, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    match stage.needs_apply(&text, ctx) {
        Ok(false) => return text,
        Ok(true) => {}
        Err(e) => {
            warn!(stage = stage.name(), error = %e, "stage pre-check failed, skipping");
            return text;
        }
    }
    // `apply` consumes the Cow; lend it a borrow so a failure can fall back.
    let outcome = match stage.apply(Cow::Borrowed(text.as_ref()), ctx) {
        Ok(Cow::Owned(out)) => Ok(Some(out)),
        Ok(Cow::Borrowed(out)) => Ok((!std::ptr::eq(out, text.as_ref())).then(|| out.to_owned())),
        Err(e) => Err(e),
    };
    match outcome {
        Ok(Some(out)) => Cow::Owned(out),
        Ok(None) => text,
        Err(e) => {
            warn!(stage = stage.name(), error = %e, "stage failed, skipping");
            text
        }
    }
}
