//! Parser for the Sepro language.
//!
//! A recursive-descent parser over the lexer's token stream with a single
//! token of lookahead. Declarations are appended to the [`Model`] as they
//! complete; the first lexical or syntax error aborts the whole compile.

use sepro_foundation::{Error, ErrorContext, Result};
use tracing::{debug, trace};

use crate::config::CompilerConfig;
use crate::lexer::Lexer;
use crate::model::{
    Action, Actuator, BindAction, Concept, Model, ObjectContextType, Predicate, SlotPath,
    TagSetPredicate, TagsAction, World, WorldBinding, WorldObject,
};
use crate::position::TextPosition;
use crate::token::{Token, TokenKind};

/// Reserved words of the grammar.
pub const KEYWORDS: [&str; 22] = [
    "CONCEPT", "TAG", "SLOT", "WHERE", "ROOT", "ON", "ANY", "ALL", "NOT", "AND", "DO", "SET",
    "UNSET", "IN", "THIS", "OTHER", "BIND", "TO", "NOTHING", "WORLD", "OBJECT", "AS",
];

/// Keywords that begin an action inside a `DO` clause.
const ACTION_KEYWORDS: [&str; 5] = ["NOTHING", "IN", "SET", "UNSET", "BIND"];

/// Parser for Sepro source code.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Source text (for error messages).
    source: &'src str,
    config: CompilerConfig,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, CompilerConfig::default())
    }

    /// Creates a new parser with explicit options.
    #[must_use]
    pub fn with_config(source: &'src str, config: CompilerConfig) -> Self {
        let mut parser = Self {
            lexer: Lexer::new(source, KEYWORDS),
            current: Token::empty(TextPosition::at_start()),
            source,
            config,
        };
        parser.advance();
        parser
    }

    /// Compiles the whole source into a model.
    ///
    /// # Errors
    /// Returns the first lexical or syntax error; no partial model is produced.
    pub fn compile(mut self) -> Result<Model> {
        match self.parse_model() {
            Ok(model) => {
                debug!(
                    source = self.source_label(),
                    concepts = model.concepts.len(),
                    actuators = model.actuators.len(),
                    worlds = model.worlds.len(),
                    "compiled model"
                );
                Ok(model)
            }
            Err(err) => {
                let err = match &self.config.source_name {
                    Some(name) => {
                        let context = ErrorContext::new()
                            .with_source(name.clone())
                            .with_position(err.line(), err.column());
                        err.with_context(context)
                    }
                    None => err,
                };
                debug!(source = self.source_label(), error = %err, "compile failed");
                Err(err)
            }
        }
    }

    fn source_label(&self) -> &str {
        self.config.source_name.as_deref().unwrap_or("<input>")
    }

    /// Top level: declarations until end of input.
    fn parse_model(&mut self) -> Result<Model> {
        let mut model = Model::new();

        while !self.current.is_empty() {
            if self.at_keyword("CONCEPT") {
                model.concepts.push(self.parse_concept()?);
            } else if self.at_keyword("WHERE") {
                model.actuators.push(self.parse_actuator()?);
            } else if self.at_keyword("WORLD") {
                model.worlds.push(self.parse_world()?);
            } else {
                return Err(self.unexpected("expected keyword CONCEPT, WHERE or WORLD"));
            }
        }

        Ok(model)
    }

    // =========================================================================
    // Concepts
    // =========================================================================

    /// `CONCEPT name (TAG a, b | SLOT c, d)*`
    fn parse_concept(&mut self) -> Result<Concept> {
        self.expect_keyword("CONCEPT")?;
        let mut concept = Concept::new(self.expect_identifier("concept name")?);

        loop {
            if self.accept_keyword("TAG") {
                for tag in self.identifier_list("tag name")? {
                    concept.tags = concept.tags.insert(tag);
                }
            } else if self.accept_keyword("SLOT") {
                for slot in self.identifier_list("slot name")? {
                    concept.slots = concept.slots.insert(slot);
                }
            } else {
                break;
            }
        }

        trace!(
            concept = %concept.name,
            tags = concept.tags.len(),
            slots = concept.slots.len(),
            "parsed concept"
        );
        Ok(concept)
    }

    // =========================================================================
    // Actuators
    // =========================================================================

    /// `WHERE [ROOT] predicates [ON (ANY | predicates)] DO action+`
    fn parse_actuator(&mut self) -> Result<Actuator> {
        self.expect_keyword("WHERE")?;
        let is_root = self.accept_keyword("ROOT");
        let conditions = self.parse_predicates(&["ALL"])?;

        let other_conditions = if self.accept_keyword("ON") {
            Some(self.parse_predicates(&["ANY", "ALL"])?)
        } else {
            None
        };

        self.expect_keyword("DO")?;
        let mut actions = vec![self.parse_action()?];
        while ACTION_KEYWORDS.iter().any(|kw| self.at_keyword(kw)) {
            actions.push(self.parse_action()?);
        }

        let actuator = Actuator {
            is_root,
            conditions,
            other_conditions,
            actions,
        };
        trace!(
            is_root,
            conditions = actuator.conditions.len(),
            interactive = actuator.is_interactive(),
            actions = actuator.actions.len(),
            "parsed actuator"
        );
        Ok(actuator)
    }

    /// A lone wildcard, or `[NOT] item (AND [NOT] item)*`.
    fn parse_predicates(&mut self, wildcards: &[&str]) -> Result<Vec<Predicate>> {
        if let Some(wildcard) = wildcards.iter().find(|kw| self.at_keyword(kw)) {
            self.advance();
            if self.at_keyword("AND") {
                return Err(self.error(format!("{wildcard} must be the only condition")));
            }
            return Ok(vec![Predicate::Any]);
        }

        let mut predicates = vec![Predicate::TagSet(self.parse_predicate()?)];
        while self.accept_keyword("AND") {
            predicates.push(Predicate::TagSet(self.parse_predicate()?));
        }
        Ok(predicates)
    }

    /// `[NOT] tag` or `[NOT] slot.tag`
    fn parse_predicate(&mut self) -> Result<TagSetPredicate> {
        let negated = self.accept_keyword("NOT");
        let name = self.expect_identifier("tag name")?;

        let predicate = if self.accept_operator('.') {
            TagSetPredicate::tag(self.expect_identifier("tag name")?).in_slot(name)
        } else {
            TagSetPredicate::tag(name)
        };

        Ok(if negated {
            predicate.negated()
        } else {
            predicate
        })
    }

    /// `NOTHING`, or `[IN context] (SET | UNSET) tags`, or
    /// `[IN context] BIND slot TO target`.
    fn parse_action(&mut self) -> Result<Action> {
        if self.accept_keyword("NOTHING") {
            return Ok(Action::Nothing);
        }

        // A bare `IN` addresses this object.
        let (in_context, in_slot) = if self.accept_keyword("IN")
            && !["SET", "UNSET", "BIND"].iter().any(|kw| self.at_keyword(kw))
        {
            self.parse_context(ObjectContextType::This)?
        } else {
            (ObjectContextType::This, None)
        };

        if self.at_keyword("SET") || self.at_keyword("UNSET") {
            let is_unset = self.at_keyword("UNSET");
            self.advance();
            let tags = self.identifier_list("tag name")?;
            Ok(Action::Tags(TagsAction {
                tags,
                is_unset,
                in_context,
                in_slot,
            }))
        } else if self.accept_keyword("BIND") {
            let source_slot = self.expect_identifier("slot name")?;
            self.expect_keyword("TO")?;
            let (target_context, target_slot) = self.parse_context(in_context)?;
            Ok(Action::Bind(BindAction {
                source_slot,
                target_context,
                target_slot,
                in_context,
                in_slot,
            }))
        } else {
            Err(self.unexpected("expected action NOTHING, SET, UNSET or BIND"))
        }
    }

    /// Object addressing: `THIS[.slot]`, `ROOT[.slot]`, `OTHER[.slot]`, or a
    /// bare slot name resolved against `bare`.
    fn parse_context(
        &mut self,
        bare: ObjectContextType,
    ) -> Result<(ObjectContextType, Option<String>)> {
        let context = if self.accept_keyword("THIS") {
            ObjectContextType::This
        } else if self.accept_keyword("ROOT") {
            ObjectContextType::Root
        } else if self.accept_keyword("OTHER") {
            ObjectContextType::Other
        } else if self.current.kind == TokenKind::Identifier {
            let slot = self.expect_identifier("slot name")?;
            return Ok((bare, Some(slot)));
        } else {
            return Err(self.unexpected("expected THIS, ROOT, OTHER or slot name"));
        };

        let slot = if self.accept_operator('.') {
            Some(self.expect_identifier("slot name")?)
        } else {
            None
        };
        Ok((context, slot))
    }

    // =========================================================================
    // Worlds
    // =========================================================================

    /// `WORLD name [ROOT name] [OBJECT concept [AS alias], ...] [BIND path TO path, ...]`
    fn parse_world(&mut self) -> Result<World> {
        self.expect_keyword("WORLD")?;
        let mut world = World::new(self.expect_identifier("world name")?);
        let (mut seen_objects, mut seen_bindings) = (false, false);

        loop {
            if self.at_keyword("ROOT") {
                if world.root_name.is_some() {
                    return Err(self.duplicate_clause("ROOT", &world));
                }
                self.advance();
                world.root_name = Some(self.expect_identifier("root object name")?);
            } else if self.at_keyword("OBJECT") {
                if seen_objects {
                    return Err(self.duplicate_clause("OBJECT", &world));
                }
                seen_objects = true;
                self.advance();
                loop {
                    world.objects.push(self.parse_world_object()?);
                    if !self.accept_operator(',') {
                        break;
                    }
                }
            } else if self.at_keyword("BIND") {
                if seen_bindings {
                    return Err(self.duplicate_clause("BIND", &world));
                }
                seen_bindings = true;
                self.advance();
                loop {
                    let from = self.parse_slot_path()?;
                    self.expect_keyword("TO")?;
                    let to = self.parse_slot_path()?;
                    world.bindings.push(WorldBinding { from, to });
                    if !self.accept_operator(',') {
                        break;
                    }
                }
            } else {
                break;
            }
        }

        trace!(
            world = %world.name,
            objects = world.objects.len(),
            bindings = world.bindings.len(),
            "parsed world"
        );
        Ok(world)
    }

    /// `concept [AS alias]`
    fn parse_world_object(&mut self) -> Result<WorldObject> {
        let concept_name = self.expect_identifier("concept name")?;
        let alias = if self.accept_keyword("AS") {
            Some(self.expect_identifier("object alias")?)
        } else {
            None
        };
        Ok(WorldObject {
            concept_name,
            alias,
        })
    }

    /// `alias.slot`
    fn parse_slot_path(&mut self) -> Result<SlotPath> {
        let object = self.expect_identifier("object alias")?;
        self.expect_operator('.')?;
        let slot = self.expect_identifier("slot name")?;
        Ok(SlotPath { object, slot })
    }

    fn duplicate_clause(&self, clause: &str, world: &World) -> Error {
        self.error(format!(
            "duplicate {clause} clause in world '{}'",
            world.name
        ))
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
        if self.config.trace_tokens {
            trace!(
                kind = self.current.kind.name(),
                text = %self.current.text,
                line = self.current.pos.line,
                column = self.current.pos.column,
                "token"
            );
        }
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        self.current.is_keyword(keyword)
    }

    /// Consumes the keyword if it is the current token.
    fn accept_keyword(&mut self, keyword: &str) -> bool {
        let found = self.at_keyword(keyword);
        if found {
            self.advance();
        }
        found
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<()> {
        if self.accept_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("expected {keyword}")))
        }
    }

    /// Consumes the operator if it is the current token.
    fn accept_operator(&mut self, operator: char) -> bool {
        let found = self.current.is_operator(operator);
        if found {
            self.advance();
        }
        found
    }

    fn expect_operator(&mut self, operator: char) -> Result<()> {
        if self.accept_operator(operator) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("expected '{operator}'")))
        }
    }

    /// Consumes an identifier and returns its text.
    fn expect_identifier(&mut self, what: &str) -> Result<String> {
        if self.current.kind == TokenKind::Identifier {
            let text = std::mem::take(&mut self.current.text);
            self.advance();
            Ok(text)
        } else {
            Err(self.unexpected(&format!("expected {what}")))
        }
    }

    /// `name (, name)*`
    fn identifier_list(&mut self, what: &str) -> Result<Vec<String>> {
        let mut names = vec![self.expect_identifier(what)?];
        while self.accept_operator(',') {
            names.push(self.expect_identifier(what)?);
        }
        Ok(names)
    }

    /// Error for the current token: the lexer's own error, or `expected`
    /// followed by what was found.
    fn unexpected(&self, expected: &str) -> Error {
        match &self.current.kind {
            TokenKind::Error(message) => Error::lexical(
                message.clone(),
                self.current.pos.line,
                self.current.pos.column,
                self.context_line(),
            ),
            _ => self.error(format!("{expected}, found {}", self.current)),
        }
    }

    /// Creates a syntax error at the current position.
    fn error(&self, message: String) -> Error {
        Error::syntax(
            message,
            self.current.pos.line,
            self.current.pos.column,
            self.context_line(),
        )
    }

    /// Gets the source line of the current token for error messages.
    fn context_line(&self) -> String {
        self.current.pos.line_text(self.source).to_string()
    }
}
