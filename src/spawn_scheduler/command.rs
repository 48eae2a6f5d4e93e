use crossbeam_channel::{unbounded, Receiver, Sender};

/// Demande de création d'entités, émise par un déclencheur (timer, clic).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnCommand {
    /// Lancer une fusée depuis le bas de la surface
    Rocket,
    /// Explosion centrée sur une position surface (clic)
    Explosion { x: f64, y: f64 },
    /// Explosion à une position aléatoire de la moitié haute, résolue par le registre
    AmbientExplosion,
}

pub type SpawnSender = Sender<SpawnCommand>;

/// File de commandes : les déclencheurs poussent, la boucle de rendu vide
/// la file avant chaque tick. Tout tourne sur le même thread, le canal sert
/// uniquement à découpler les producteurs du registre.
#[derive(Debug)]
pub struct SpawnQueue {
    sender: SpawnSender,
    receiver: Receiver<SpawnCommand>,
}

impl Default for SpawnQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl SpawnQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    pub fn sender(&self) -> SpawnSender {
        self.sender.clone()
    }

    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Commandes en attente, dans l'ordre d'émission.
    pub fn drain(&self) -> impl Iterator<Item = SpawnCommand> + '_ {
        self.receiver.try_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order() {
        let queue = SpawnQueue::new();
        let tx = queue.sender();
        tx.send(SpawnCommand::Rocket).unwrap();
        tx.send(SpawnCommand::Explosion { x: 1.0, y: 2.0 }).unwrap();
        assert_eq!(queue.len(), 2);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![SpawnCommand::Rocket, SpawnCommand::Explosion { x: 1.0, y: 2.0 }]
        );
        assert!(queue.is_empty());
    }
}
