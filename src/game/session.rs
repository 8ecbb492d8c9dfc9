//! One game on one board
//!
//! `GameSession` owns the board, the progress, the word being built and the
//! single in-flight dictionary lookup. Submissions are two-phase: local rules
//! run in [`GameSession::begin_submission`], the oracle's answer is applied in
//! [`GameSession::complete_submission`]. Only one lookup may be outstanding and
//! answers for abandoned lookups are discarded.

use super::candidate::CandidateWord;
use super::rules::{Rejection, RulesConfig, check_word, normalize_word};
use super::state::GameState;
use crate::core::{Board, BoardError, BoardRules};
use crate::dictionary::{DictionaryOracle, Verdict};
use crate::generator::{BoardGenerator, GenerationError};
use rand::Rng;

/// Where the session is in the submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No letters chosen beyond the seed
    Idle,
    /// A word is being built letter by letter
    Building,
    /// Waiting for the dictionary
    Submitted,
}

/// Identifies one dictionary lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// How the submitted word was entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Typed,
    Built,
}

/// A word that passed local rules and now needs a dictionary answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    ticket: Ticket,
    word: String,
    origin: Origin,
}

impl PendingLookup {
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// The word in upper case, as it will be recorded
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The lowercase form sent to the oracle
    #[must_use]
    pub fn query(&self) -> String {
        self.word.to_ascii_lowercase()
    }

    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }
}

/// A committed word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub word: String,
    /// First letter required of the next word
    pub next_start: char,
    /// Every board letter has now been used
    pub complete: bool,
}

#[derive(Debug)]
pub struct GameSession {
    board: Board,
    state: GameState,
    rules: RulesConfig,
    candidate: CandidateWord,
    in_flight: Option<PendingLookup>,
    next_ticket: u64,
}

impl GameSession {
    #[must_use]
    pub fn new(board: Board, rules: RulesConfig) -> Self {
        Self {
            board,
            state: GameState::new(),
            rules,
            candidate: CandidateWord::new(),
            in_flight: None,
            next_ticket: 0,
        }
    }

    /// Start a session on a freshly generated board
    ///
    /// # Errors
    /// Returns the generator's error if no board could be built.
    pub fn generate<R: Rng + ?Sized>(
        generator: &BoardGenerator,
        rules: RulesConfig,
        rng: &mut R,
    ) -> Result<Self, GenerationError> {
        let generated = generator.generate(rng)?;
        Ok(Self::new(generated.board, rules))
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub const fn candidate(&self) -> &CandidateWord {
        &self.candidate
    }

    /// The word currently awaiting the dictionary
    #[must_use]
    pub fn pending_word(&self) -> Option<&str> {
        self.in_flight.as_ref().map(PendingLookup::word)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.in_flight.is_some() {
            Phase::Submitted
        } else if self.candidate.is_pristine() {
            Phase::Idle
        } else {
            Phase::Building
        }
    }

    /// Replace the board and start over
    pub fn set_board(&mut self, board: Board) {
        tracing::info!(%board, "new board");
        self.board = board;
        self.reset_progress();
    }

    /// Use externally supplied letters as the new board
    ///
    /// The current board and progress are kept if the letters are invalid.
    ///
    /// # Errors
    /// Returns `BoardError` if the sides break any board invariant.
    pub fn set_custom_board(
        &mut self,
        sides: [&str; 4],
        board_rules: &BoardRules,
    ) -> Result<(), BoardError> {
        let board = Board::from_sides(sides, board_rules)?;
        self.set_board(board);
        Ok(())
    }

    /// Generate a new board and start over
    ///
    /// On failure the current board and progress are left untouched.
    ///
    /// # Errors
    /// Returns the generator's error if no board could be built.
    pub fn restart<R: Rng + ?Sized>(
        &mut self,
        generator: &BoardGenerator,
        rng: &mut R,
    ) -> Result<(), GenerationError> {
        match generator.generate(rng) {
            Ok(generated) => {
                self.set_board(generated.board);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "board generation failed, keeping current board");
                Err(e)
            }
        }
    }

    /// Forget every accepted word but keep the board
    pub fn clear_progress(&mut self) {
        tracing::debug!("progress cleared");
        self.reset_progress();
    }

    fn reset_progress(&mut self) {
        self.state.clear();
        self.candidate.reset(None);
        self.cancel_submission();
    }

    /// Add one letter to the word being built
    ///
    /// # Errors
    /// Rejects non-letters, letters off the board, a first letter that breaks
    /// the chain, a letter on the same side as the previous one, and (when
    /// reuse is off) letters from earlier words. Input is locked while a
    /// lookup is outstanding. The candidate is unchanged on error.
    pub fn select_letter(&mut self, letter: char) -> Result<(), Rejection> {
        if self.in_flight.is_some() {
            return Err(Rejection::SubmissionPending);
        }

        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(Rejection::InvalidCharacter(letter));
        }

        // Retyping the untouched seed is a no-op
        if self.candidate.is_pristine() && self.candidate.seed() == Some(letter) {
            return Ok(());
        }

        let side = self
            .board
            .side_of(letter)
            .ok_or(Rejection::LetterNotOnBoard(letter))?;

        match self.candidate.last() {
            None => {
                if let Some(expected) = self.state.required_start()
                    && letter != expected
                {
                    return Err(Rejection::WrongStart {
                        expected,
                        found: letter,
                    });
                }
            }
            Some(previous) => {
                let previous_side = self
                    .board
                    .side_of(previous)
                    .unwrap_or_else(|| unreachable!("candidate letter {previous} left the board"));
                if previous_side == side {
                    return Err(Rejection::SameSideAdjacent {
                        first: previous,
                        second: letter,
                        side,
                    });
                }
            }
        }

        let chained_start =
            self.candidate.is_empty() && self.state.required_start() == Some(letter);
        if !self.rules.allow_letter_reuse && !chained_start && self.state.has_used_letter(letter) {
            return Err(Rejection::LetterAlreadyUsed(letter));
        }

        self.candidate.push(letter);
        Ok(())
    }

    /// Remove the last chosen letter
    ///
    /// Returns `Ok(None)` when nothing has been chosen yet.
    ///
    /// # Errors
    /// Returns `SubmissionPending` while a lookup is outstanding, and
    /// `WrongStart` when only the seeded start letter is left.
    pub fn delete_last_letter(&mut self) -> Result<Option<char>, Rejection> {
        if self.in_flight.is_some() {
            return Err(Rejection::SubmissionPending);
        }
        if let Some(seed) = self.candidate.seed()
            && self.candidate.is_pristine()
        {
            return Err(Rejection::WrongStart {
                expected: seed,
                found: seed,
            });
        }
        Ok(self.candidate.pop())
    }

    /// Drop the built letters, keeping the seed, and abandon any lookup
    pub fn clear_candidate(&mut self) {
        self.candidate.reset(self.seed());
        self.cancel_submission();
    }

    /// Abandon the outstanding lookup; its answer will be discarded
    ///
    /// Returns whether a lookup was outstanding.
    pub fn cancel_submission(&mut self) -> bool {
        match self.in_flight.take() {
            Some(pending) => {
                tracing::debug!(word = pending.word(), "lookup abandoned");
                true
            }
            None => false,
        }
    }

    fn seed(&self) -> Option<char> {
        if self.rules.seed_next_word {
            self.state.required_start()
        } else {
            None
        }
    }

    /// Check a typed word against the local rules and reserve the lookup
    ///
    /// # Errors
    /// Returns the first local rule violation, or `SubmissionPending` if a
    /// lookup is already outstanding. No lookup should be made on error.
    pub fn begin_submission(&mut self, word: &str) -> Result<PendingLookup, Rejection> {
        let word = normalize_word(word);
        self.begin(word, Origin::Typed)
    }

    /// Submit the word built letter by letter
    ///
    /// # Errors
    /// Same as [`GameSession::begin_submission`].
    pub fn begin_candidate_submission(&mut self) -> Result<PendingLookup, Rejection> {
        let word = self.candidate.to_string();
        self.begin(word, Origin::Built)
    }

    fn begin(&mut self, word: String, origin: Origin) -> Result<PendingLookup, Rejection> {
        if self.in_flight.is_some() {
            return Err(Rejection::SubmissionPending);
        }

        let check_sides = origin == Origin::Typed || self.rules.require_full_chain_validation;
        if let Err(rejection) =
            check_word(&word, &self.board, &self.state, &self.rules, check_sides)
        {
            tracing::debug!(%word, %rejection, "word rejected");
            return Err(rejection);
        }

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;

        let pending = PendingLookup {
            ticket,
            word,
            origin,
        };
        self.in_flight = Some(pending.clone());
        Ok(pending)
    }

    /// Apply the dictionary's answer for `ticket`
    ///
    /// # Errors
    /// `StaleVerdict` if the ticket is not the outstanding lookup (state is
    /// not touched), `NotFound` or `OracleUnavailable` for negative answers.
    pub fn complete_submission(
        &mut self,
        ticket: Ticket,
        verdict: Verdict,
    ) -> Result<Accepted, Rejection> {
        let pending = match self.in_flight.take() {
            Some(pending) if pending.ticket == ticket => pending,
            other => {
                self.in_flight = other;
                tracing::warn!(?ticket, "discarding stale dictionary answer");
                return Err(Rejection::StaleVerdict);
            }
        };

        match verdict {
            Verdict::Found => Ok(self.commit(pending.word)),
            Verdict::NotFound => {
                tracing::debug!(word = pending.word(), "not in dictionary");
                Err(Rejection::NotFound(pending.word))
            }
            Verdict::Unavailable(reason) => {
                tracing::warn!(word = pending.word(), %reason, "dictionary unavailable");
                Err(Rejection::OracleUnavailable(reason))
            }
        }
    }

    fn commit(&mut self, word: String) -> Accepted {
        let next_start = word
            .chars()
            .last()
            .unwrap_or_else(|| unreachable!("accepted word is empty"));

        self.state.record(word.clone());
        self.candidate.reset(self.seed());

        let complete = self.state.is_complete(&self.board);
        tracing::info!(%word, %next_start, complete, "word accepted");

        Accepted {
            word,
            next_start,
            complete,
        }
    }

    /// Check a typed word locally, ask the oracle, and apply the answer
    ///
    /// # Errors
    /// Any local rejection (the oracle is not asked), or the oracle's
    /// negative answer.
    pub async fn submit_word<O: DictionaryOracle>(
        &mut self,
        word: &str,
        oracle: &O,
    ) -> Result<Accepted, Rejection> {
        let pending = self.begin_submission(word)?;
        self.resolve(pending, oracle).await
    }

    /// Submit the built word through the oracle
    ///
    /// # Errors
    /// Same as [`GameSession::submit_word`].
    pub async fn submit_candidate<O: DictionaryOracle>(
        &mut self,
        oracle: &O,
    ) -> Result<Accepted, Rejection> {
        let pending = self.begin_candidate_submission()?;
        self.resolve(pending, oracle).await
    }

    async fn resolve<O: DictionaryOracle>(
        &mut self,
        pending: PendingLookup,
        oracle: &O,
    ) -> Result<Accepted, Rejection> {
        let verdict = oracle.lookup(&pending.query()).await;
        self.complete_submission(pending.ticket(), verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;
    use crate::dictionary::testing::CountingOracle;
    use crate::game::RejectionKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board() -> Board {
        Board::parse("ATE-MPS-RON-CID", &BoardRules::default()).unwrap()
    }

    fn session() -> GameSession {
        GameSession::new(board(), RulesConfig::default())
    }

    fn oracle() -> CountingOracle {
        CountingOracle::new(["moist", "tram", "trap", "mode", "tone", "east", "pest", "ton"])
    }

    #[tokio::test]
    async fn moist_then_torn_scenario() {
        let mut game = session();
        let oracle = oracle();

        let accepted = game.submit_word("MOIST", &oracle).await.unwrap();
        assert_eq!(accepted.word, "MOIST");
        assert_eq!(accepted.next_start, 'T');
        assert!(!accepted.complete);
        assert_eq!(game.state().required_start(), Some('T'));
        assert_eq!(oracle.calls(), 1);

        let rejection = game.submit_word("TORN", &oracle).await.unwrap_err();
        assert_eq!(
            rejection,
            Rejection::SameSideAdjacent {
                first: 'O',
                second: 'R',
                side: Side::Right
            }
        );
        assert_eq!(oracle.calls(), 1, "oracle must not be asked about TORN");
    }

    #[tokio::test]
    async fn too_short_never_reaches_oracle() {
        let mut game = session();
        let oracle = oracle();

        let rejection = game.submit_word("AT", &oracle).await.unwrap_err();
        assert_eq!(rejection.kind(), RejectionKind::TooShort);
        assert_eq!(oracle.calls(), 0);
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn rejection_is_idempotent() {
        let mut game = session();
        let oracle = oracle();

        for word in ["AT", "MOBS", "MOON", "MITE"] {
            let first = game.submit_word(word, &oracle).await.unwrap_err();
            let second = game.submit_word(word, &oracle).await.unwrap_err();
            assert_eq!(first, second, "{word}");
        }
        assert!(game.state().used_words().is_empty());
    }

    #[tokio::test]
    async fn duplicate_ignores_case() {
        let mut game = session();
        let oracle = oracle();

        game.submit_word("moist", &oracle).await.unwrap();
        game.submit_word("tram", &oracle).await.unwrap();
        let rejection = game.submit_word("Moist", &oracle).await.unwrap_err();
        assert_eq!(rejection, Rejection::DuplicateWord("MOIST".to_string()));
    }

    #[tokio::test]
    async fn chaining_enforced_after_first_word() {
        let mut game = session();
        let oracle = oracle();

        // Any start letter is fine for the first word
        game.submit_word("MODE", &oracle).await.unwrap();

        let rejection = game.submit_word("TRAM", &oracle).await.unwrap_err();
        assert_eq!(
            rejection,
            Rejection::WrongStart {
                expected: 'E',
                found: 'T'
            }
        );

        game.submit_word("EAST", &oracle).await.unwrap_err();
        assert_eq!(game.state().used_words(), &["MODE".to_string()]);
    }

    #[tokio::test]
    async fn not_found_is_terminal_and_state_untouched() {
        let mut game = session();
        let oracle = oracle();

        let rejection = game.submit_word("MIST", &oracle).await.unwrap_err();
        assert_eq!(rejection, Rejection::NotFound("MIST".to_string()));
        assert_eq!(oracle.calls(), 1);
        assert_eq!(game.state(), &GameState::new());
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn unavailable_can_be_retried() {
        let mut game = session();
        let oracle = oracle().failing_first(1);

        let rejection = game.submit_word("MOIST", &oracle).await.unwrap_err();
        assert!(rejection.is_retryable());
        assert_eq!(rejection.kind(), RejectionKind::OracleUnavailable);

        let accepted = game.submit_word("MOIST", &oracle).await.unwrap();
        assert_eq!(accepted.next_start, 'T');
        assert_eq!(oracle.calls(), 2);
    }

    #[tokio::test]
    async fn accepted_words_never_repeat_a_side() {
        let letters: Vec<char> = board().letters().collect();
        let mut rng = StdRng::seed_from_u64(42);
        let words: Vec<String> = (0..400)
            .map(|_| {
                let len = rng.random_range(3..=6);
                (0..len)
                    .map(|_| letters[rng.random_range(0..letters.len())])
                    .collect()
            })
            .collect();
        let oracle = CountingOracle::new(words.iter().map(|w| w.to_ascii_lowercase()));

        let mut game = session();
        let mut accepted = 0;
        for word in &words {
            let before = oracle.calls();
            match game.submit_word(word, &oracle).await {
                Ok(outcome) => {
                    accepted += 1;
                    assert_eq!(outcome.word, *word);
                    assert_eq!(oracle.calls(), before + 1);
                }
                // Local rejections never reach the dictionary
                Err(rejection) if rejection.kind() != RejectionKind::NotFound => {
                    assert_eq!(oracle.calls(), before, "{word}: {rejection}");
                }
                Err(rejection) => panic!("{word} unexpectedly missing: {rejection}"),
            }
        }

        let board = game.board().clone();
        for word in game.state().used_words() {
            let sides: Vec<Side> = word.chars().filter_map(|c| board.side_of(c)).collect();
            assert!(sides.windows(2).all(|w| w[0] != w[1]), "{word}");
        }
        assert_eq!(game.state().word_count(), accepted);
        assert!(accepted >= 3, "only {accepted} words accepted");
    }

    #[test]
    fn second_submission_refused_while_pending() {
        let mut game = session();

        let pending = game.begin_submission("MOIST").unwrap();
        assert_eq!(game.phase(), Phase::Submitted);
        assert_eq!(game.pending_word(), Some("MOIST"));
        assert_eq!(pending.query(), "moist");
        assert_eq!(pending.origin(), Origin::Typed);

        assert_eq!(
            game.begin_submission("MODE"),
            Err(Rejection::SubmissionPending)
        );
        assert_eq!(game.select_letter('M'), Err(Rejection::SubmissionPending));

        let accepted = game
            .complete_submission(pending.ticket(), Verdict::Found)
            .unwrap();
        assert_eq!(accepted.word, "MOIST");
        assert_eq!(game.state().word_count(), 1);
    }

    #[test]
    fn verdict_cannot_be_applied_twice() {
        let mut game = session();

        let pending = game.begin_submission("MOIST").unwrap();
        game.complete_submission(pending.ticket(), Verdict::Found)
            .unwrap();

        assert_eq!(
            game.complete_submission(pending.ticket(), Verdict::Found),
            Err(Rejection::StaleVerdict)
        );
        assert_eq!(game.state().word_count(), 1);
    }

    #[test]
    fn stale_verdict_after_clear_is_discarded() {
        let mut game = session();

        let pending = game.begin_submission("MOIST").unwrap();
        game.clear_candidate();
        assert_eq!(game.phase(), Phase::Idle);

        assert_eq!(
            game.complete_submission(pending.ticket(), Verdict::Found),
            Err(Rejection::StaleVerdict)
        );
        assert!(game.state().used_words().is_empty());
        assert_eq!(game.state().required_start(), None);
    }

    #[test]
    fn stale_verdict_does_not_cancel_newer_lookup() {
        let mut game = session();

        let old = game.begin_submission("MOIST").unwrap();
        assert!(game.cancel_submission());
        let new = game.begin_submission("MODE").unwrap();

        assert_eq!(
            game.complete_submission(old.ticket(), Verdict::Found),
            Err(Rejection::StaleVerdict)
        );
        assert_eq!(game.pending_word(), Some("MODE"));

        let accepted = game
            .complete_submission(new.ticket(), Verdict::Found)
            .unwrap();
        assert_eq!(accepted.word, "MODE");
    }

    #[test]
    fn stale_verdict_after_restart_is_discarded() {
        let mut game = session();
        let mut rng = StdRng::seed_from_u64(4);

        let pending = game.begin_submission("MOIST").unwrap();
        game.restart(&BoardGenerator::default(), &mut rng).unwrap();

        assert_eq!(
            game.complete_submission(pending.ticket(), Verdict::Found),
            Err(Rejection::StaleVerdict)
        );
        assert!(game.state().used_words().is_empty());
    }

    #[test]
    fn building_letter_by_letter() {
        let mut game = session();

        for letter in "moist".chars() {
            game.select_letter(letter).unwrap();
        }
        assert_eq!(game.phase(), Phase::Building);
        assert_eq!(game.candidate().to_string(), "MOIST");

        let pending = game.begin_candidate_submission().unwrap();
        assert_eq!(pending.origin(), Origin::Built);
        let accepted = game
            .complete_submission(pending.ticket(), Verdict::Found)
            .unwrap();

        // Next candidate is seeded with the chained letter
        assert_eq!(accepted.next_start, 'T');
        assert_eq!(game.candidate().to_string(), "T");
        assert_eq!(game.candidate().seed(), Some('T'));
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[test]
    fn building_rejects_bad_letters() {
        let mut game = session();

        assert_eq!(game.select_letter('B'), Err(Rejection::LetterNotOnBoard('B')));
        assert_eq!(game.select_letter('3'), Err(Rejection::InvalidCharacter('3')));

        game.select_letter('T').unwrap();
        game.select_letter('O').unwrap();
        assert_eq!(
            game.select_letter('R'),
            Err(Rejection::SameSideAdjacent {
                first: 'O',
                second: 'R',
                side: Side::Right
            })
        );
        assert_eq!(
            game.select_letter('O'),
            Err(Rejection::SameSideAdjacent {
                first: 'O',
                second: 'O',
                side: Side::Right
            })
        );
        assert_eq!(game.candidate().to_string(), "TO");
    }

    #[test]
    fn building_respects_chain_without_seed() {
        let rules = RulesConfig {
            seed_next_word: false,
            ..RulesConfig::default()
        };
        let mut game = GameSession::new(board(), rules);

        let pending = game.begin_submission("MOIST").unwrap();
        game.complete_submission(pending.ticket(), Verdict::Found)
            .unwrap();
        assert!(game.candidate().is_empty());

        assert_eq!(
            game.select_letter('M'),
            Err(Rejection::WrongStart {
                expected: 'T',
                found: 'M'
            })
        );
        game.select_letter('T').unwrap();
    }

    #[test]
    fn delete_keeps_seed() {
        let mut game = session();

        let pending = game.begin_submission("MOIST").unwrap();
        game.complete_submission(pending.ticket(), Verdict::Found)
            .unwrap();

        game.select_letter('R').unwrap();
        assert_eq!(game.delete_last_letter(), Ok(Some('R')));
        assert_eq!(
            game.delete_last_letter(),
            Err(Rejection::WrongStart {
                expected: 'T',
                found: 'T'
            })
        );
        assert_eq!(game.candidate().to_string(), "T");
    }

    #[test]
    fn delete_on_empty_candidate_is_noop() {
        let mut game = session();
        assert_eq!(game.delete_last_letter(), Ok(None));

        game.select_letter('M').unwrap();
        assert_eq!(game.delete_last_letter(), Ok(Some('M')));
        assert_eq!(game.delete_last_letter(), Ok(None));
    }

    #[test]
    fn retyping_seed_is_ignored() {
        let mut game = session();
        let pending = game.begin_submission("MOIST").unwrap();
        game.complete_submission(pending.ticket(), Verdict::Found)
            .unwrap();

        for letter in "tram".chars() {
            game.select_letter(letter).unwrap();
        }
        assert_eq!(game.candidate().to_string(), "TRAM");

        // Only the untouched seed is skipped; a later repeat is still a side clash
        assert_eq!(
            game.select_letter('M'),
            Err(Rejection::SameSideAdjacent {
                first: 'M',
                second: 'M',
                side: Side::Left
            })
        );
    }

    #[test]
    fn delete_refused_while_pending() {
        let mut game = session();
        game.select_letter('M').unwrap();

        let _pending = game.begin_submission("MOIST").unwrap();
        assert_eq!(game.delete_last_letter(), Err(Rejection::SubmissionPending));
    }

    #[test]
    fn built_words_skip_side_recheck_when_configured() {
        // Build a candidate directly to simulate input that bypassed letter checks
        let rules = RulesConfig {
            require_full_chain_validation: false,
            ..RulesConfig::default()
        };
        let mut game = GameSession::new(board(), rules);
        for letter in "MOON".chars() {
            game.candidate.push(letter);
        }
        assert!(game.begin_candidate_submission().is_ok());

        let mut strict = session();
        for letter in "MOON".chars() {
            strict.candidate.push(letter);
        }
        assert_eq!(
            strict.begin_candidate_submission().unwrap_err().kind(),
            RejectionKind::SameSideAdjacent
        );

        // Typed words are always fully checked
        let mut typed = GameSession::new(board(), rules);
        assert_eq!(
            typed.begin_submission("MOON").unwrap_err().kind(),
            RejectionKind::SameSideAdjacent
        );
    }

    #[test]
    fn no_reuse_policy_blocks_letters() {
        let rules = RulesConfig {
            allow_letter_reuse: false,
            ..RulesConfig::default()
        };
        let mut game = GameSession::new(board(), rules);

        let pending = game.begin_submission("MOIST").unwrap();
        game.complete_submission(pending.ticket(), Verdict::Found)
            .unwrap();

        assert_eq!(
            game.select_letter('O'),
            Err(Rejection::LetterAlreadyUsed('O'))
        );
        game.select_letter('R').unwrap();
        assert_eq!(
            game.begin_submission("TOP"),
            Err(Rejection::LetterAlreadyUsed('O'))
        );
    }

    #[test]
    fn clear_progress_keeps_board() {
        let mut game = session();
        let pending = game.begin_submission("MOIST").unwrap();
        game.complete_submission(pending.ticket(), Verdict::Found)
            .unwrap();

        game.clear_progress();

        assert_eq!(game.board(), &board());
        assert_eq!(game.state(), &GameState::new());
        assert!(game.candidate().is_empty());
        // First word of the cleared game may start anywhere
        assert!(game.begin_submission("MODE").is_ok());
    }

    #[test]
    fn custom_board_replaces_everything() {
        let mut game = session();
        let pending = game.begin_submission("MOIST").unwrap();
        game.complete_submission(pending.ticket(), Verdict::Found)
            .unwrap();

        game.set_custom_board(["gla", "sob", "eit", "ruk"], &BoardRules::default())
            .unwrap();
        assert_eq!(game.board().to_string(), "GLA-SOB-EIT-RUK");
        assert!(game.state().used_words().is_empty());
    }

    #[test]
    fn invalid_custom_board_keeps_game() {
        let mut game = session();
        let pending = game.begin_submission("MOIST").unwrap();
        game.complete_submission(pending.ticket(), Verdict::Found)
            .unwrap();

        let result = game.set_custom_board(["AEI", "MPS", "RON", "CBD"], &BoardRules::default());
        assert!(matches!(result, Err(BoardError::TooManyVowelsOnSide { .. })));
        assert_eq!(game.board(), &board());
        assert_eq!(game.state().word_count(), 1);
    }

    #[test]
    fn failed_restart_keeps_board() {
        let mut game = session();
        let impossible = BoardGenerator::new(crate::generator::GeneratorConfig {
            min_total_vowels: 9,
            max_attempts: 5,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(0);

        assert!(game.restart(&impossible, &mut rng).is_err());
        assert_eq!(game.board(), &board());
    }

    #[test]
    fn generated_session_starts_empty() {
        let mut rng = StdRng::seed_from_u64(10);
        let game =
            GameSession::generate(&BoardGenerator::default(), RulesConfig::default(), &mut rng)
                .unwrap();

        assert_eq!(game.board().letter_count(), 12);
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.state().used_words().is_empty());
    }

    #[test]
    fn completing_the_board_is_reported() {
        let mut game = session();
        let mut last = None;

        for word in ["PRANCE", "EMITS", "SOD"] {
            let pending = game.begin_submission(word).unwrap();
            last = Some(
                game.complete_submission(pending.ticket(), Verdict::Found)
                    .unwrap(),
            );
        }

        assert!(last.unwrap().complete);
        assert!(game.state().is_complete(game.board()));
    }
}
